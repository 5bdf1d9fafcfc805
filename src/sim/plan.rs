//! Which effects run for a given environment and settings

use crate::platform::Environment;
use crate::settings::{Settings, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Starfield,
    ScrollReveal,
    CursorGlow,
    CardTilt,
    ParticleTrail,
    Typing,
    Toggles,
    FloatingIdle,
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Starfield => "starfield",
            EffectKind::ScrollReveal => "scroll reveal",
            EffectKind::CursorGlow => "cursor glow",
            EffectKind::CardTilt => "card tilt",
            EffectKind::ParticleTrail => "particle trail",
            EffectKind::Typing => "typing",
            EffectKind::Toggles => "toggles",
            EffectKind::FloatingIdle => "floating idle",
        }
    }

    /// Whether this effect moves things on screen (frames, timers or CSS animation)
    pub fn is_motion(&self) -> bool {
        !matches!(self, EffectKind::Toggles)
    }

    /// Whether this effect follows a mouse pointer
    pub fn needs_pointer(&self) -> bool {
        matches!(
            self,
            EffectKind::CursorGlow | EffectKind::ParticleTrail
        )
    }
}

/// Effects to start, in initialization order
pub fn plan(env: &Environment, settings: &Settings) -> Vec<EffectKind> {
    let (pointer_effect, extra) = match settings.variant {
        Variant::Interactive => (EffectKind::CardTilt, EffectKind::Toggles),
        Variant::Ambient => (EffectKind::ParticleTrail, EffectKind::FloatingIdle),
    };

    let candidates = [
        (EffectKind::Starfield, settings.starfield),
        (EffectKind::ScrollReveal, settings.scroll_reveal),
        (EffectKind::CursorGlow, settings.cursor_glow),
        (pointer_effect, true),
        (EffectKind::Typing, settings.typing),
        (extra, true),
    ];

    candidates
        .into_iter()
        .filter(|&(kind, enabled)| {
            enabled
                && !(env.reduced_motion && kind.is_motion())
                && !(env.touch && kind.needs_pointer())
        })
        .map(|(kind, _)| kind)
        .collect()
}
