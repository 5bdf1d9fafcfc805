//! Starfield layout, star generation and twinkle
//!
//! The canvas overhangs the viewport so stars stay put while the page
//! overscrolls; how far depends on the device class.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::platform::effective_dpr;

/// Viewport size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(inner_width: f64) -> Self {
        if inner_width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if inner_width <= TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// (width, height) multipliers of the viewport
    fn scale(&self) -> (f64, f64) {
        match self {
            DeviceClass::Mobile => (3.0, 4.0),
            DeviceClass::Tablet => (2.5, 3.0),
            DeviceClass::Desktop => (2.0, 2.0),
        }
    }

    /// (left, top) offsets as multiples of the viewport
    fn offset(&self) -> (f64, f64) {
        match self {
            DeviceClass::Mobile => (-1.0, -2.0),
            DeviceClass::Tablet => (-0.75, -1.5),
            DeviceClass::Desktop => (-0.5, -1.0),
        }
    }
}

/// Canvas placement and backing store for one viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub class: DeviceClass,
    /// CSS size in px (also the drawing coordinate space)
    pub css_width: f64,
    pub css_height: f64,
    /// CSS offset in px
    pub left: f64,
    pub top: f64,
    /// Backing store size in device pixels
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Context scale applied before drawing
    pub dpr: f64,
}

impl CanvasLayout {
    /// Compute the layout for a viewport
    ///
    /// `inner_height` should already account for the visual viewport.
    pub fn for_viewport(inner_width: f64, inner_height: f64, device_pixel_ratio: f64) -> Self {
        let class = DeviceClass::from_width(inner_width);
        let (sx, sy) = class.scale();
        let (ox, oy) = class.offset();
        let dpr = effective_dpr(device_pixel_ratio);
        let css_width = inner_width * sx;
        let css_height = inner_height * sy;

        Self {
            class,
            css_width,
            css_height,
            left: inner_width * ox,
            top: inner_height * oy,
            pixel_width: (css_width * dpr).floor().max(0.0) as u32,
            pixel_height: (css_height * dpr).floor().max(0.0) as u32,
            dpr,
        }
    }

    pub fn area(&self) -> f64 {
        self.css_width * self.css_height
    }
}

/// Viewport height including the on-screen keyboard/URL-bar case
pub fn viewport_height(inner_height: f64, visual_height: Option<f64>) -> f64 {
    match visual_height {
        Some(h) => inner_height.max(h.ceil()),
        None => inner_height,
    }
}

/// Number of stars for a canvas of the given CSS size
pub fn star_count(css_width: f64, css_height: f64, touch: bool) -> usize {
    let small = css_width <= MOBILE_MAX_WIDTH;
    let divisor = if small { STAR_AREA_SMALL } else { STAR_AREA_LARGE };
    let cap = match (small, touch) {
        (true, true) => STAR_CAP_SMALL_TOUCH,
        (true, false) => STAR_CAP_SMALL,
        (false, true) => STAR_CAP_LARGE_TOUCH,
        (false, false) => STAR_CAP_LARGE,
    };
    let base = (css_width * css_height / divisor).floor().max(0.0) as usize;
    base.min(cap)
}

/// A single twinkling star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Twinkle phase (radians)
    pub phase: f32,
    /// Phase speed
    pub speed: f32,
}

impl Star {
    fn random(rng: &mut Pcg32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            radius: rng.random::<f32>() * 1.2 + 0.2,
            phase: rng.random::<f32>() * TAU,
            speed: rng.random::<f32>() * 0.4 + 0.05,
        }
    }

    /// Twinkle factor in [0.3, 1.0]
    #[inline]
    pub fn twinkle(&self) -> f32 {
        0.3 + self.phase.sin().abs() * 0.7
    }
}

/// Star population for the current canvas
pub struct Starfield {
    pub layout: CanvasLayout,
    pub stars: Vec<Star>,
    /// Twinkle every frame; otherwise stars are drawn once at a fixed alpha
    pub animated: bool,
    touch: bool,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(seed: u64, touch: bool) -> Self {
        Self {
            layout: CanvasLayout::for_viewport(0.0, 0.0, 1.0),
            stars: Vec::new(),
            animated: !touch,
            touch,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Relayout for a new viewport and regenerate every star
    pub fn resize(&mut self, inner_width: f64, inner_height: f64, device_pixel_ratio: f64) {
        self.apply_layout(CanvasLayout::for_viewport(
            inner_width,
            inner_height,
            device_pixel_ratio,
        ));
    }

    /// Adopt a layout the canvas already has and regenerate every star
    pub fn apply_layout(&mut self, layout: CanvasLayout) {
        self.layout = layout;
        let count = star_count(self.layout.css_width, self.layout.css_height, self.touch);
        let (w, h) = (self.layout.css_width as f32, self.layout.css_height as f32);

        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            let star = Star::random(&mut self.rng, w, h);
            self.stars.push(star);
        }
    }

    /// Advance every star by one frame (no-op when static)
    pub fn step(&mut self) {
        if !self.animated {
            return;
        }
        for star in self.stars.iter_mut() {
            star.phase += star.speed * STAR_PHASE_STEP;
        }
    }

    /// Alpha to draw a star with this frame
    pub fn alpha(&self, star: &Star) -> f32 {
        let twinkle = if self.animated {
            star.twinkle()
        } else {
            STAR_STATIC_TWINKLE
        };
        twinkle * STAR_ALPHA_SCALE
    }
}

/// What the canvas should do in response to a lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Action {
    /// Cancel the pending frame
    pub stop_ticker: bool,
    /// Paint the current stars once
    pub draw: bool,
    /// Twinkle on every frame from now on
    pub start_ticker: bool,
}

/// Decides when the starfield loop runs
///
/// Static (touch) fields are painted on first draw and resize only; animated
/// fields run while the tab is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarfieldSchedule {
    animated: bool,
}

impl StarfieldSchedule {
    pub fn new(animated: bool) -> Self {
        Self { animated }
    }

    fn paint(&self, hidden: bool) -> Action {
        Action {
            stop_ticker: false,
            draw: true,
            start_ticker: self.animated && !hidden,
        }
    }

    /// Deferred first paint
    pub fn on_first_draw(&self, hidden: bool) -> Action {
        self.paint(hidden)
    }

    pub fn on_hidden(&self) -> Action {
        Action {
            stop_ticker: true,
            ..Action::default()
        }
    }

    pub fn on_visible(&self) -> Action {
        if self.animated {
            self.paint(false)
        } else {
            Action::default()
        }
    }

    /// Viewport changed; the pending frame never outlives a relayout
    pub fn on_resize(&self, hidden: bool) -> Action {
        Action {
            stop_ticker: true,
            ..self.paint(hidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layout_classes() {
        let mobile = CanvasLayout::for_viewport(400.0, 800.0, 3.0);
        assert_eq!(mobile.class, DeviceClass::Mobile);
        assert_eq!(mobile.css_width, 1200.0);
        assert_eq!(mobile.css_height, 3200.0);
        assert_eq!(mobile.left, -400.0);
        assert_eq!(mobile.top, -1600.0);
        assert_eq!(mobile.pixel_width, 2400);

        let tablet = CanvasLayout::for_viewport(768.0, 1024.0, 1.0);
        assert_eq!(tablet.class, DeviceClass::Tablet);
        assert_eq!(tablet.css_width, 1920.0);
        assert_eq!(tablet.left, -576.0);
        assert_eq!(tablet.top, -1536.0);

        let desktop = CanvasLayout::for_viewport(1440.0, 900.0, 1.5);
        assert_eq!(desktop.class, DeviceClass::Desktop);
        assert_eq!(desktop.pixel_width, 4320);
        assert_eq!(desktop.pixel_height, 2700);
        assert_eq!(desktop.left, -720.0);
        assert_eq!(desktop.top, -900.0);
    }

    #[test]
    fn test_viewport_height_uses_visual_viewport() {
        assert_eq!(viewport_height(700.0, Some(731.2)), 732.0);
        assert_eq!(viewport_height(700.0, Some(500.0)), 700.0);
        assert_eq!(viewport_height(700.0, None), 700.0);
    }

    #[test]
    fn test_star_count_caps() {
        // Huge desktop canvas hits the cap
        assert_eq!(star_count(3840.0, 2160.0, false), STAR_CAP_LARGE);
        assert_eq!(star_count(3840.0, 2160.0, true), STAR_CAP_LARGE_TOUCH);
        // Small canvas: 400 x 400 / 16000 = 10
        assert_eq!(star_count(400.0, 400.0, false), 10);
        assert_eq!(star_count(480.0, 100000.0, true), STAR_CAP_SMALL_TOUCH);
        assert_eq!(star_count(480.0, 100000.0, false), STAR_CAP_SMALL);
        assert_eq!(star_count(0.0, 0.0, false), 0);
    }

    #[test]
    fn test_resize_regenerates_within_bounds() {
        let mut field = Starfield::new(7, false);
        field.resize(1280.0, 720.0, 2.0);
        assert_eq!(field.stars.len(), STAR_CAP_LARGE);
        let first = field.stars[0];

        for star in &field.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x <= field.layout.css_width as f32);
            assert!(star.pos.y >= 0.0 && star.pos.y <= field.layout.css_height as f32);
            assert!(star.radius >= 0.2 && star.radius <= 1.4);
            assert!(star.speed >= 0.05 && star.speed <= 0.45);
        }

        field.resize(1280.0, 720.0, 2.0);
        assert_ne!(field.stars[0], first);
    }

    #[test]
    fn test_step_advances_phase() {
        let mut field = Starfield::new(1, false);
        field.resize(1024.0, 768.0, 1.0);
        let before: Vec<f32> = field.stars.iter().map(|s| s.phase).collect();
        field.step();
        for (star, old) in field.stars.iter().zip(before) {
            assert!((star.phase - (old + star.speed * STAR_PHASE_STEP)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_static_stars_on_touch() {
        let mut field = Starfield::new(1, true);
        field.resize(390.0, 844.0, 3.0);
        assert!(!field.animated);
        let before = field.stars.clone();
        field.step();
        assert_eq!(field.stars, before);
        let alpha = field.alpha(&field.stars[0]);
        assert!((alpha - STAR_STATIC_TWINKLE * STAR_ALPHA_SCALE).abs() < 1e-6);
    }

    #[test]
    fn test_schedule_hidden_stops_loop() {
        for animated in [true, false] {
            let action = StarfieldSchedule::new(animated).on_hidden();
            assert!(action.stop_ticker);
            assert!(!action.start_ticker);
            assert!(!action.draw);
        }
    }

    #[test]
    fn test_schedule_visible() {
        let action = StarfieldSchedule::new(true).on_visible();
        assert!(action.draw && action.start_ticker);

        // Touch stars are static, nothing to resume
        assert_eq!(StarfieldSchedule::new(false).on_visible(), Action::default());
    }

    #[test]
    fn test_schedule_resize() {
        let schedule = StarfieldSchedule::new(true);
        let visible = schedule.on_resize(false);
        assert_eq!(
            visible,
            Action {
                stop_ticker: true,
                draw: true,
                start_ticker: true
            }
        );

        // Hidden tab: repaint once, stay paused
        let hidden = schedule.on_resize(true);
        assert!(hidden.stop_ticker && hidden.draw);
        assert!(!hidden.start_ticker);

        let touch = StarfieldSchedule::new(false).on_resize(false);
        assert!(touch.draw && !touch.start_ticker);
    }

    #[test]
    fn test_schedule_first_draw() {
        assert!(StarfieldSchedule::new(true).on_first_draw(false).start_ticker);
        let hidden = StarfieldSchedule::new(true).on_first_draw(true);
        assert!(hidden.draw && !hidden.start_ticker);
    }

    #[test]
    fn test_apply_layout_matches_canvas() {
        let mut field = Starfield::new(3, false);
        let layout = CanvasLayout::for_viewport(400.0, 600.0, 2.0);
        field.apply_layout(layout);
        assert_eq!(field.layout, layout);
        assert_eq!(field.stars.len(), star_count(layout.css_width, layout.css_height, false));
    }

    proptest! {
        #[test]
        fn prop_mobile_backing_width(w in 1.0f64..=480.0, h in 1.0f64..2000.0, dpr in 0.5f64..4.0) {
            let layout = CanvasLayout::for_viewport(w, h, dpr);
            prop_assert_eq!(layout.pixel_width, (3.0 * w * dpr.min(2.0)).floor() as u32);
        }

        #[test]
        fn prop_star_count_formula(w in 0.0f64..6000.0, h in 0.0f64..6000.0, touch: bool) {
            let small = w <= 480.0;
            let divisor = if small { 16000.0 } else { 10000.0 };
            let cap = match (small, touch) {
                (true, true) => 90,
                (true, false) => 130,
                (false, true) => 140,
                (false, false) => 220,
            };
            let expected = ((w * h / divisor).floor() as usize).min(cap);
            prop_assert_eq!(star_count(w, h, touch), expected);
        }

        #[test]
        fn prop_alpha_in_range(phase in -100.0f32..100.0) {
            let field = Starfield::new(0, false);
            let star = Star { pos: Vec2::ZERO, radius: 1.0, phase, speed: 0.1 };
            let alpha = field.alpha(&star);
            prop_assert!(alpha >= 0.3 * STAR_ALPHA_SCALE - 1e-6);
            prop_assert!(alpha <= STAR_ALPHA_SCALE + 1e-6);
        }
    }
}
