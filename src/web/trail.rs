//! Particle trail on a full-viewport overlay canvas

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use super::dom;
use crate::platform::ticker::now_ms;
use crate::platform::{Listener, Next, Ticker};
use crate::sim::ParticleTrail;

const OVERLAY_STYLE: [(&str, &str); 6] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("pointer-events", "none"),
    ("z-index", "9999"),
    ("background", "transparent"),
];

struct TrailCanvas {
    trail: ParticleTrail,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl TrailCanvas {
    fn fit_viewport(&self) -> Result<(), JsValue> {
        let (w, h) = dom::inner_size(&dom::window()?)?;
        dom::set_style(&self.canvas, "width", &format!("{}px", w))?;
        dom::set_style(&self.canvas, "height", &format!("{}px", h))?;
        self.canvas.set_width(w.max(0.0) as u32);
        self.canvas.set_height(h.max(0.0) as u32);
        Ok(())
    }

    fn draw(&self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for particle in &self.trail.particles {
            self.ctx.set_fill_style_str(&particle.color_css());
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                particle.pos.x as f64,
                particle.pos.y as f64,
                particle.size as f64,
                0.0,
                TAU,
            );
            self.ctx.fill();
        }
    }
}

pub struct TrailEffect {
    canvas: HtmlCanvasElement,
    _listeners: Vec<Listener>,
    _ticker: Ticker,
}

impl Drop for TrailEffect {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

pub fn init(document: &Document) -> Result<Option<TrailEffect>, JsValue> {
    let Some(body) = document.body() else {
        return Ok(None);
    };

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_attribute("aria-hidden", "true")?;
    for (property, value) in OVERLAY_STYLE {
        dom::set_style(&canvas, property, value)?;
    }
    let ctx = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()?;
    body.append_child(&canvas)?;

    let state = Rc::new(RefCell::new(TrailCanvas {
        trail: ParticleTrail::new(dom::seed()),
        canvas: canvas.clone(),
        ctx,
    }));
    state.borrow().fit_viewport()?;

    let window = dom::window()?;
    let mut listeners = Vec::new();
    {
        let state = state.clone();
        listeners.push(Listener::new(&window, "mousemove", move |event: MouseEvent| {
            state
                .borrow_mut()
                .trail
                .pointer_moved(dom::client_pos(&event), now_ms());
        })?);
    }
    {
        let state = state.clone();
        listeners.push(Listener::new(&window, "resize", move |_event: web_sys::Event| {
            if let Err(e) = state.borrow().fit_viewport() {
                log::warn!("Trail overlay resize failed: {:?}", e);
            }
        })?);
    }

    let ticker = Ticker::new(move |now| {
        let mut s = state.borrow_mut();
        s.trail.step(now);
        s.draw();
        Next::Frame
    });
    ticker.start(Next::Frame);

    Ok(Some(TrailEffect {
        canvas,
        _listeners: listeners,
        _ticker: ticker,
    }))
}
