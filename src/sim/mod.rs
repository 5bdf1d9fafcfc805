//! Pure effect models
//!
//! Everything an effect computes lives here, free of DOM types, so frames can
//! be stepped deterministically in tests:
//! - Seeded RNG only
//! - Time passed in explicitly (ms)
//! - No rendering or platform dependencies

pub mod float;
pub mod particles;
pub mod plan;
pub mod reveal;
pub mod smoothing;
pub mod starfield;
pub mod tilt;
pub mod toggle;
pub mod typing;

pub use float::{FloatTiming, float_timing};
pub use particles::{Particle, ParticleTrail};
pub use plan::{EffectKind, plan};
pub use reveal::RevealTracker;
pub use smoothing::{GlowVars, SmoothedOffset, normalized_offset};
pub use starfield::{CanvasLayout, DeviceClass, Star, Starfield, StarfieldSchedule, star_count};
pub use tilt::{TiltFrame, TiltState};
pub use toggle::{ToggleGroup, ToggleState};
pub use typing::Typewriter;
