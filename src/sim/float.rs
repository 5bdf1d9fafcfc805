//! Floating idle animation timing
//!
//! Durations cycle through three values so neighbours drift out of step, and
//! each element starts a little after the previous one.

/// Keyframes name the stylesheet must define
pub const FLOAT_KEYFRAMES: &str = "float";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatTiming {
    pub duration_s: f32,
    pub delay_s: f32,
}

impl FloatTiming {
    /// Value for `style.animation`
    pub fn animation_css(&self) -> String {
        format!(
            "{} {}s ease-in-out {}s infinite",
            FLOAT_KEYFRAMES, self.duration_s, self.delay_s
        )
    }
}

/// Timing for the element at `index` in document order
pub fn float_timing(index: usize) -> FloatTiming {
    FloatTiming {
        duration_s: 6.0 + (index % 3) as f32,
        delay_s: index as f32 * 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_cycles() {
        assert_eq!(float_timing(0).duration_s, 6.0);
        assert_eq!(float_timing(1).duration_s, 7.0);
        assert_eq!(float_timing(2).duration_s, 8.0);
        assert_eq!(float_timing(3).duration_s, 6.0);
        assert_eq!(float_timing(0).delay_s, 0.0);
        assert!((float_timing(5).delay_s - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_animation_css() {
        assert_eq!(float_timing(1).animation_css(), "float 7s ease-in-out 0.4s infinite");
    }
}
