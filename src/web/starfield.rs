//! Starfield canvas (`#stars`)

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, IdleRequestOptions};

use super::dom;
use crate::consts::STAR_IDLE_TIMEOUT_MS;
use crate::platform::{Environment, Listener, Next, Ticker};
use crate::sim::starfield::{Action, viewport_height};
use crate::sim::{CanvasLayout, Starfield, StarfieldSchedule};

const CANVAS_ID: &str = "stars";

struct StarCanvas {
    field: Starfield,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl StarCanvas {
    /// Size the canvas to the viewport and regenerate stars
    ///
    /// Stars only change once the canvas has taken the new layout.
    fn resize(&mut self) -> Result<(), JsValue> {
        let window = dom::window()?;
        let (inner_w, inner_h) = dom::inner_size(&window)?;
        let height = viewport_height(inner_h, window.visual_viewport().map(|v| v.height()));
        let layout = CanvasLayout::for_viewport(inner_w, height, window.device_pixel_ratio());

        dom::set_style(&self.canvas, "width", &format!("{}px", layout.css_width))?;
        dom::set_style(&self.canvas, "height", &format!("{}px", layout.css_height))?;
        dom::set_style(&self.canvas, "left", &format!("{}px", layout.left))?;
        dom::set_style(&self.canvas, "top", &format!("{}px", layout.top))?;
        self.canvas.set_width(layout.pixel_width);
        self.canvas.set_height(layout.pixel_height);
        // Resizing the canvas resets the transform
        self.ctx
            .set_transform(layout.dpr, 0.0, 0.0, layout.dpr, 0.0, 0.0)?;
        self.field.apply_layout(layout);

        log::debug!(
            "Starfield {:?}: {}x{} px, {} stars",
            layout.class,
            layout.pixel_width,
            layout.pixel_height,
            self.field.stars.len()
        );
        Ok(())
    }

    fn draw(&self) {
        let layout = self.field.layout;
        self.ctx.clear_rect(0.0, 0.0, layout.css_width, layout.css_height);
        self.ctx.set_fill_style_str("rgba(255,255,255,0.9)");

        for star in &self.field.stars {
            self.ctx.set_global_alpha(self.field.alpha(star) as f64);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                star.pos.x as f64,
                star.pos.y as f64,
                star.radius as f64,
                0.0,
                TAU,
            );
            self.ctx.fill();
        }

        self.ctx.set_global_alpha(1.0);
    }
}

pub struct StarfieldEffect {
    _listeners: Vec<Listener>,
    _ticker: Rc<Ticker>,
}

fn apply(action: Action, state: &RefCell<StarCanvas>, ticker: &Ticker) {
    if action.stop_ticker {
        ticker.stop();
    }
    if action.draw {
        state.borrow().draw();
    }
    if action.start_ticker {
        ticker.start(Next::Frame);
    }
}

pub fn init(document: &Document, env: &Environment) -> Result<Option<StarfieldEffect>, JsValue> {
    let Some(el) = document.get_element_by_id(CANVAS_ID) else {
        return Ok(None);
    };
    let canvas: HtmlCanvasElement = el
        .dyn_into()
        .map_err(|_| JsValue::from_str("#stars is not a canvas"))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let field = Starfield::new(dom::seed(), env.touch);
    let schedule = StarfieldSchedule::new(field.animated);
    let state = Rc::new(RefCell::new(StarCanvas {
        field,
        canvas,
        ctx,
    }));
    state.borrow_mut().resize()?;

    let ticker = {
        let state = state.clone();
        Rc::new(Ticker::new(move |_now| {
            let mut s = state.borrow_mut();
            s.field.step();
            s.draw();
            Next::Frame
        }))
    };

    let window = dom::window()?;
    let mut listeners = Vec::new();

    // Resize: cancel the pending frame, relayout, redraw
    let on_resize = {
        let state = state.clone();
        let ticker = ticker.clone();
        let document = document.clone();
        move |_event: web_sys::Event| {
            ticker.stop();
            if let Err(e) = state.borrow_mut().resize() {
                // Old stars still match the old canvas size
                log::warn!("Starfield resize failed: {:?}", e);
            }
            apply(schedule.on_resize(document.hidden()), &state, &ticker);
        }
    };
    listeners.push(Listener::new(&window, "resize", on_resize.clone())?);
    if let Some(viewport) = window.visual_viewport() {
        listeners.push(Listener::new(&viewport, "resize", on_resize.clone())?);
        listeners.push(Listener::new(&viewport, "scroll", on_resize)?);
    }

    // Pause while the tab is hidden
    {
        let state = state.clone();
        let ticker = ticker.clone();
        let doc = document.clone();
        listeners.push(Listener::new(
            document,
            "visibilitychange",
            move |_event: web_sys::Event| {
                let action = if doc.hidden() {
                    schedule.on_hidden()
                } else {
                    schedule.on_visible()
                };
                apply(action, &state, &ticker);
            },
        )?);
    }

    schedule_first_draw(
        &window,
        document.clone(),
        schedule,
        Rc::downgrade(&state),
        Rc::downgrade(&ticker),
    );

    Ok(Some(StarfieldEffect {
        _listeners: listeners,
        _ticker: ticker,
    }))
}

/// First draw waits for an idle moment when the browser supports it
fn schedule_first_draw(
    window: &web_sys::Window,
    document: Document,
    schedule: StarfieldSchedule,
    state: Weak<RefCell<StarCanvas>>,
    ticker: Weak<Ticker>,
) {
    let start = move || {
        if let (Some(state), Some(ticker)) = (state.upgrade(), ticker.upgrade()) {
            apply(schedule.on_first_draw(document.hidden()), &state, &ticker);
        }
    };

    let has_idle = js_sys::Reflect::has(window, &JsValue::from_str("requestIdleCallback"))
        .unwrap_or(false);
    if !has_idle {
        start();
        return;
    }

    let options = IdleRequestOptions::new();
    options.set_timeout(STAR_IDLE_TIMEOUT_MS);
    let callback = Closure::once_into_js(start);
    if window
        .request_idle_callback_with_options(callback.unchecked_ref(), &options)
        .is_err()
    {
        log::warn!("requestIdleCallback failed; starfield waits for the next resize");
    }
}
