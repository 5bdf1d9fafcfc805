//! DOM wiring for the page effects
//!
//! Each effect is built once, owns its listeners and loops, and is torn down
//! by dropping it. Missing markup skips an effect; a failing effect is logged
//! and never stops the others.

mod dom;
mod float;
mod glow;
mod reveal;
mod starfield;
mod tilt;
mod toggles;
mod trail;
mod typing;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::platform::Environment;
use crate::settings::Settings;
use crate::sim::{EffectKind, plan};

/// A started effect (held for its `Drop`)
#[allow(dead_code)]
enum Running {
    Starfield(starfield::StarfieldEffect),
    Reveal(reveal::RevealEffect),
    Glow(glow::GlowEffect),
    Tilt(Vec<tilt::TiltEffect>),
    Trail(trail::TrailEffect),
    Typing(Vec<typing::TypingEffect>),
    Toggles(toggles::ToggleEffect),
    Floating(float::FloatingEffect),
}

fn start_effect(
    kind: EffectKind,
    document: &Document,
    env: &Environment,
) -> Result<Option<Running>, JsValue> {
    Ok(match kind {
        EffectKind::Starfield => starfield::init(document, env)?.map(Running::Starfield),
        EffectKind::ScrollReveal => reveal::init(document)?.map(Running::Reveal),
        EffectKind::CursorGlow => glow::init(document)?.map(Running::Glow),
        EffectKind::CardTilt => tilt::init(document)?.map(Running::Tilt),
        EffectKind::ParticleTrail => trail::init(document)?.map(Running::Trail),
        EffectKind::Typing => typing::init(document)?.map(Running::Typing),
        EffectKind::Toggles => toggles::init(document)?.map(Running::Toggles),
        EffectKind::FloatingIdle => float::init(document)?.map(Running::Floating),
    })
}

/// Every effect running on the page
pub struct Effects {
    running: Vec<(EffectKind, Running)>,
}

impl Effects {
    pub fn init(document: &Document, env: &Environment, settings: &Settings) -> Self {
        let mut running = Vec::new();
        for kind in plan(env, settings) {
            match start_effect(kind, document, env) {
                Ok(Some(effect)) => {
                    log::info!("Started {}", kind.name());
                    running.push((kind, effect));
                }
                Ok(None) => log::debug!("Skipped {} (no target on page)", kind.name()),
                Err(e) => log::warn!("Failed to start {}: {:?}", kind.name(), e),
            }
        }
        Self { running }
    }

    pub fn kinds(&self) -> impl Iterator<Item = EffectKind> + '_ {
        self.running.iter().map(|(kind, _)| *kind)
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}

impl Drop for Effects {
    fn drop(&mut self) {
        // Reverse start order
        while let Some((kind, effect)) = self.running.pop() {
            drop(effect);
            log::debug!("Stopped {}", kind.name());
        }
    }
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

fn boot(document: &Document, mut settings: Settings) {
    if let Some(variant) = document
        .body()
        .and_then(|body| body.get_attribute("data-effects-variant"))
    {
        settings.apply_variant_override(&variant);
    }

    let Some(env) = Environment::detect(settings.force_reduced_motion) else {
        log::error!("Could not read the browser environment");
        return;
    };
    log::info!(
        "Effects ({}) on {}x{} @{}x viewport, touch: {}, reduced motion: {}",
        settings.variant.as_str(),
        env.inner_width,
        env.inner_height,
        env.dpr(),
        env.touch,
        env.reduced_motion
    );

    let effects = Effects::init(document, &env, &settings);
    log::info!(
        "{} effects running: {:?}",
        effects.len(),
        effects.kinds().map(|k| k.name()).collect::<Vec<_>>()
    );

    let previous = EFFECTS.with(|slot| slot.borrow_mut().replace(effects));
    drop(previous);
}

/// Load settings, then start the effects once the document is ready
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);

    let settings = Settings::load();
    log::set_max_level(settings.level().to_level_filter());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document; effects disabled");
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || boot(&doc, settings));
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
        }
    } else {
        boot(&document, settings);
    }
}

/// Stop every effect and remove its listeners
#[wasm_bindgen]
pub fn dispose_effects() {
    let effects = EFFECTS.with(|slot| slot.borrow_mut().take());
    if let Some(effects) = effects {
        log::info!("Disposing {} effects", effects.len());
    }
}
