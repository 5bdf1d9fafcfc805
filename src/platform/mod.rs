//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Environment detection (reduced motion, touch, viewport)
//! - Frame and timer scheduling (`Ticker`)
//! - Event listener ownership (`Listener`)

#[cfg(target_arch = "wasm32")]
pub mod listener;
#[cfg(target_arch = "wasm32")]
pub mod ticker;

#[cfg(target_arch = "wasm32")]
pub use listener::Listener;
#[cfg(target_arch = "wasm32")]
pub use ticker::{Next, Ticker};

use crate::consts::{MAX_DPR, TABLET_MAX_WIDTH};

/// Snapshot of the browser environment taken at initialization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// User asked for minimal motion
    pub reduced_motion: bool,
    /// Phone-class touch device
    pub touch: bool,
    /// Raw `devicePixelRatio`
    pub device_pixel_ratio: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            touch: false,
            device_pixel_ratio: 1.0,
            inner_width: 1280.0,
            inner_height: 800.0,
        }
    }
}

impl Environment {
    /// Device pixel ratio used for canvas backing stores
    pub fn dpr(&self) -> f64 {
        effective_dpr(self.device_pixel_ratio)
    }

    /// Read the current browser environment
    #[cfg(target_arch = "wasm32")]
    pub fn detect(force_reduced_motion: bool) -> Option<Self> {
        let window = web_sys::window()?;

        let prefers_reduced = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);

        let inner_width = window.inner_width().ok()?.as_f64()?;
        let inner_height = window.inner_height().ok()?.as_f64()?;
        let user_agent = window.navigator().user_agent().unwrap_or_default();

        Some(Self {
            reduced_motion: prefers_reduced || force_reduced_motion,
            touch: is_touch_device(&user_agent, inner_width),
            device_pixel_ratio: window.device_pixel_ratio(),
            inner_width,
            inner_height,
        })
    }
}

/// Clamp a reported device pixel ratio to what the canvases render at
#[inline]
pub fn effective_dpr(reported: f64) -> f64 {
    if reported.is_finite() && reported > 0.0 {
        reported.min(MAX_DPR)
    } else {
        1.0
    }
}

/// Phone-class touch detection: mobile user agent on a narrow viewport
pub fn is_touch_device(user_agent: &str, inner_width: f64) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    (ua.contains("mobi") || ua.contains("android")) && inner_width <= TABLET_MAX_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    const ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

    #[test]
    fn test_touch_detection() {
        assert!(is_touch_device(IPHONE, 390.0));
        assert!(is_touch_device(ANDROID_TABLET, 768.0));
        // Wide viewport on a mobile UA is treated as a desktop pointer
        assert!(!is_touch_device(ANDROID_TABLET, 1024.0));
        assert!(!is_touch_device(DESKTOP, 390.0));
    }

    #[test]
    fn test_effective_dpr() {
        assert_eq!(effective_dpr(1.0), 1.0);
        assert_eq!(effective_dpr(1.5), 1.5);
        assert_eq!(effective_dpr(3.0), 2.0);
        assert_eq!(effective_dpr(0.0), 1.0);
        assert_eq!(effective_dpr(f64::NAN), 1.0);
    }
}
