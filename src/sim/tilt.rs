//! Card tilt: smoothed, clamped cursor offset mapped onto a 3D transform

use glam::Vec2;

use super::smoothing::SmoothedOffset;
use crate::clamp_unit;
use crate::consts::*;

/// One frame's worth of tilt output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    /// Degrees
    pub rotate_x: f32,
    pub rotate_y: f32,
    /// Lift (px)
    pub translate_z: f32,
    /// Drop shadow offset and blur (px)
    pub shadow_x: f32,
    pub shadow_y: f32,
    pub shadow_blur: f32,
}

impl TiltFrame {
    /// Value for `style.transform`
    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, self.translate_z
        )
    }

    /// Value for `style.boxShadow` (the glow layers read `--glow-intensity`)
    pub fn box_shadow_css(&self) -> String {
        format!(
            "0 10px 40px rgba(0,0,0,0.35), \
             inset 0 1px 0 rgba(255,255,255,0.06), \
             0 0 20px rgba(124, 58, 237, calc(var(--glow-intensity) * 0.3)), \
             0 0 40px rgba(6, 182, 212, calc(var(--glow-intensity) * 0.2)), \
             {}px {}px {}px rgba(0,0,0,0.3)",
            self.shadow_x, self.shadow_y, self.shadow_blur
        )
    }
}

/// Per-card tilt state
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltState {
    offset: SmoothedOffset,
    hovering: bool,
}

impl TiltState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.hovering = true;
    }

    /// Pointer left: drop the lift and ease back to flat
    pub fn leave(&mut self) {
        self.hovering = false;
        self.offset.reset();
    }

    /// Record a raw offset (clamped to the card)
    pub fn pointer(&mut self, raw: Vec2) {
        self.offset
            .set_target(Vec2::new(clamp_unit(raw.x), clamp_unit(raw.y)));
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn target(&self) -> Vec2 {
        self.offset.target
    }

    /// Advance one frame
    pub fn step(&mut self) -> TiltFrame {
        let current = self.offset.step();
        TiltFrame {
            rotate_x: -current.y * TILT_DEGREES,
            rotate_y: current.x * TILT_DEGREES,
            translate_z: if self.hovering { TILT_LIFT_PX } else { 0.0 },
            shadow_x: current.x * TILT_SHADOW_OFFSET,
            shadow_y: current.y * TILT_SHADOW_OFFSET,
            shadow_blur: if self.hovering {
                TILT_SHADOW_BLUR_HOVER
            } else {
                TILT_SHADOW_BLUR
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_is_clamped() {
        let mut tilt = TiltState::new();
        tilt.pointer(Vec2::new(4.0, -2.5));
        assert_eq!(tilt.target(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_tilt_frame_direction() {
        let mut tilt = TiltState::new();
        tilt.enter();
        tilt.pointer(Vec2::new(1.0, 1.0));
        let frame = tilt.step();
        // First frame moves 10% of the way
        assert!((frame.rotate_y - 1.5).abs() < 1e-5);
        assert!((frame.rotate_x + 1.5).abs() < 1e-5);
        assert_eq!(frame.translate_z, TILT_LIFT_PX);
        assert_eq!(frame.shadow_blur, TILT_SHADOW_BLUR_HOVER);
        assert!((frame.shadow_x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_leave_settles_flat() {
        let mut tilt = TiltState::new();
        tilt.enter();
        tilt.pointer(Vec2::new(-1.0, 0.5));
        for _ in 0..50 {
            tilt.step();
        }
        tilt.leave();
        assert!(!tilt.is_hovering());
        let mut frame = tilt.step();
        assert_eq!(frame.translate_z, 0.0);
        assert_eq!(frame.shadow_blur, TILT_SHADOW_BLUR);
        for _ in 0..300 {
            frame = tilt.step();
        }
        assert!(frame.rotate_x.abs() < 1e-3 && frame.rotate_y.abs() < 1e-3);
    }

    #[test]
    fn test_css_strings() {
        let frame = TiltFrame {
            rotate_x: -3.0,
            rotate_y: 4.5,
            translate_z: 30.0,
            shadow_x: 2.0,
            shadow_y: -1.0,
            shadow_blur: 40.0,
        };
        assert_eq!(
            frame.transform_css(),
            "perspective(1000px) rotateX(-3deg) rotateY(4.5deg) translateZ(30px)"
        );
        assert!(frame.box_shadow_css().ends_with("2px -1px 40px rgba(0,0,0,0.3)"));
    }
}
