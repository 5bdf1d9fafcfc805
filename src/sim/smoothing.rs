//! Cursor offset tracking with exponential smoothing
//!
//! Shared by the cursor glow and the card tilt.

use glam::Vec2;

use crate::consts::{GLOW_BASE, GLOW_FALLOFF, SMOOTHING};

/// Cursor offset from a rect's centre in half-extents
///
/// (0, 0) is the centre and ±1 the edges; points outside the rect go past 1.
/// A degenerate rect yields zero on that axis.
pub fn normalized_offset(client: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    let half = rect_size / 2.0;
    let center = rect_min + half;
    let delta = client - center;
    Vec2::new(
        if half.x > 0.0 { delta.x / half.x } else { 0.0 },
        if half.y > 0.0 { delta.y / half.y } else { 0.0 },
    )
}

/// A value that eases toward its target a fixed fraction per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothedOffset {
    /// Latest raw offset
    pub target: Vec2,
    /// Eased offset
    pub current: Vec2,
}

impl SmoothedOffset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Return the target to rest
    pub fn reset(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Advance one frame and return the new current value
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * SMOOTHING;
        self.current
    }
}

/// Custom properties published for the glow stylesheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowVars {
    pub x: f32,
    pub y: f32,
    pub intensity: f32,
}

impl GlowVars {
    pub fn from_offset(offset: Vec2) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            intensity: (GLOW_BASE - offset.length() * GLOW_FALLOFF).max(0.0),
        }
    }

    /// (property, value) pairs ready for `style.setProperty`
    pub fn properties(&self) -> [(&'static str, String); 3] {
        [
            ("--glow-x", self.x.to_string()),
            ("--glow-y", self.y.to_string()),
            ("--glow-intensity", self.intensity.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_offset() {
        let min = Vec2::new(100.0, 50.0);
        let size = Vec2::new(200.0, 100.0);
        assert_eq!(normalized_offset(Vec2::new(200.0, 100.0), min, size), Vec2::ZERO);
        assert_eq!(normalized_offset(Vec2::new(300.0, 50.0), min, size), Vec2::new(1.0, -1.0));
        // Unclamped outside the rect
        assert_eq!(normalized_offset(Vec2::new(500.0, 100.0), min, size), Vec2::new(3.0, 0.0));
        // Zero-size rect doesn't divide by zero
        assert_eq!(normalized_offset(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_smoothing_converges() {
        let mut s = SmoothedOffset::new();
        s.set_target(Vec2::new(1.0, -1.0));
        let first = s.step();
        assert!((first.x - 0.1).abs() < 1e-6);
        assert!((first.y + 0.1).abs() < 1e-6);

        for _ in 0..200 {
            s.step();
        }
        assert!((s.current - s.target).length() < 1e-3);

        s.reset();
        for _ in 0..200 {
            s.step();
        }
        assert!(s.current.length() < 1e-3);
    }

    #[test]
    fn test_glow_intensity() {
        assert!((GlowVars::from_offset(Vec2::ZERO).intensity - 0.3).abs() < 1e-6);
        assert!((GlowVars::from_offset(Vec2::new(1.0, 0.0)).intensity - 0.1).abs() < 1e-6);
        // Falls off to zero past 1.5 units
        assert_eq!(GlowVars::from_offset(Vec2::new(2.0, 2.0)).intensity, 0.0);
    }

    #[test]
    fn test_glow_properties() {
        let vars = GlowVars { x: 0.5, y: -0.25, intensity: 0.2 };
        let props = vars.properties();
        assert_eq!(props[0], ("--glow-x", "0.5".to_string()));
        assert_eq!(props[1], ("--glow-y", "-0.25".to_string()));
        assert_eq!(props[2].0, "--glow-intensity");
    }
}
