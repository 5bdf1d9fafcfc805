//! Site Effects - decorative visuals for the landing page
//!
//! Core modules:
//! - `sim`: Pure effect models (stars, smoothing, particles, typing, toggles)
//! - `platform`: Browser environment detection and frame/timer scheduling
//! - `settings`: Persisted effect preferences
//! - `web`: DOM wiring for each effect (wasm32 only)

pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use platform::Environment;
pub use settings::{Settings, Variant};
pub use sim::plan::{EffectKind, plan};

/// Effect tuning constants
pub mod consts {
    /// Device pixel ratio ceiling for canvas backing stores
    pub const MAX_DPR: f64 = 2.0;

    /// Viewport breakpoints (CSS pixels)
    pub const MOBILE_MAX_WIDTH: f64 = 480.0;
    pub const TABLET_MAX_WIDTH: f64 = 768.0;

    /// Star density: one star per this many square CSS pixels
    pub const STAR_AREA_SMALL: f64 = 16000.0;
    pub const STAR_AREA_LARGE: f64 = 10000.0;
    /// Star caps by canvas size and input class
    pub const STAR_CAP_SMALL_TOUCH: usize = 90;
    pub const STAR_CAP_SMALL: usize = 130;
    pub const STAR_CAP_LARGE_TOUCH: usize = 140;
    pub const STAR_CAP_LARGE: usize = 220;
    /// Phase advance multiplier per frame
    pub const STAR_PHASE_STEP: f32 = 0.02;
    /// Alpha used when stars are drawn without twinkling (touch devices)
    pub const STAR_STATIC_TWINKLE: f32 = 0.6;
    /// Overall star opacity multiplier
    pub const STAR_ALPHA_SCALE: f32 = 0.7;
    /// Delay budget for the idle-callback first draw (ms)
    pub const STAR_IDLE_TIMEOUT_MS: u32 = 800;

    /// Exponential smoothing factor per frame (glow and tilt)
    pub const SMOOTHING: f32 = 0.1;
    /// Glow intensity at the card centre and falloff per unit distance
    pub const GLOW_BASE: f32 = 0.3;
    pub const GLOW_FALLOFF: f32 = 0.2;

    /// Card tilt
    pub const TILT_DEGREES: f32 = 15.0;
    pub const TILT_LIFT_PX: f32 = 30.0;
    pub const TILT_SHADOW_OFFSET: f32 = 20.0;
    pub const TILT_SHADOW_BLUR_HOVER: f32 = 40.0;
    pub const TILT_SHADOW_BLUR: f32 = 25.0;
    pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

    /// Particle trail
    pub const TRAIL_SPAWN_CHANCE: f32 = 0.3;
    pub const TRAIL_MOVE_TIMEOUT_MS: f64 = 100.0;
    pub const PARTICLE_SHRINK: f32 = 0.99;
    pub const PARTICLE_MIN_SIZE: f32 = 0.1;

    /// Typing effect
    pub const TYPING_START_DELAY_MS: u32 = 500;
    pub const TYPING_CHAR_INTERVAL_MS: u32 = 50;

    /// Scroll reveal observer options
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
}

/// Clamp a value to the unit range [-1, 1]
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(-1.0, 1.0)
}
