//! Site Effects entry point
//!
//! On the web this starts the page effects; natively it logs a preview of
//! the starfield layout, the effect plan and a typing schedule.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    site_effects::web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Site Effects (native) preview");
    log::info!("Effects only run in the browser - build with `trunk serve` for the web version");

    preview_starfield();
    preview_plan();
    preview_typing("Welcome to Xenargs Softworks");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn preview_starfield() {
    use site_effects::sim::{CanvasLayout, star_count};

    let viewports = [(375.0, 812.0, 3.0), (768.0, 1024.0, 2.0), (1920.0, 1080.0, 1.0)];
    for (w, h, dpr) in viewports {
        let layout = CanvasLayout::for_viewport(w, h, dpr);
        log::info!(
            "{}x{} @{}x -> {:?} canvas {}x{} px at ({}, {}), area {:.0}, stars {} (touch {})",
            w,
            h,
            dpr,
            layout.class,
            layout.pixel_width,
            layout.pixel_height,
            layout.left,
            layout.top,
            layout.area(),
            star_count(layout.css_width, layout.css_height, false),
            star_count(layout.css_width, layout.css_height, true),
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn preview_plan() {
    use site_effects::{Environment, Settings, Variant, plan};

    for variant in [Variant::Interactive, Variant::Ambient] {
        let settings = Settings {
            variant,
            ..Settings::load()
        };
        for reduced_motion in [false, true] {
            let env = Environment {
                reduced_motion,
                ..Default::default()
            };
            let names: Vec<_> = plan(&env, &settings).iter().map(|k| k.name()).collect();
            log::info!(
                "{} (reduced motion: {}): {:?}",
                variant.as_str(),
                reduced_motion,
                names
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn preview_typing(text: &str) {
    use site_effects::sim::Typewriter;

    let writer = Typewriter::new(text);
    log::info!(
        "Typing {} chars completes after {} ms",
        writer.len(),
        writer.total_duration_ms()
    );
    for ms in [0, 500, 1000, writer.total_duration_ms()] {
        log::info!("  t={:>4}ms {:?}", ms, Typewriter::visible_at(text, ms));
    }
}
