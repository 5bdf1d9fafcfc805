//! Cursor glow on the first `.card`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::dom;
use crate::platform::{Listener, Next, Ticker};
use crate::sim::{GlowVars, SmoothedOffset, normalized_offset};

const SELECTOR: &str = ".card";

pub struct GlowEffect {
    _listeners: Vec<Listener>,
    _ticker: Ticker,
}

pub fn init(document: &Document) -> Result<Option<GlowEffect>, JsValue> {
    let Some(card) = document.query_selector(SELECTOR)? else {
        return Ok(None);
    };
    let Ok(card) = card.dyn_into::<HtmlElement>() else {
        return Ok(None);
    };

    let offset = Rc::new(RefCell::new(SmoothedOffset::new()));
    let window = dom::window()?;
    let mut listeners = Vec::new();

    {
        let offset = offset.clone();
        let card = card.clone();
        listeners.push(Listener::new(&window, "mousemove", move |event: MouseEvent| {
            let (min, size) = dom::client_rect(&card);
            let raw = normalized_offset(dom::client_pos(&event), min, size);
            offset.borrow_mut().set_target(raw);
        })?);
    }

    // Pointer left the page
    if let Some(root) = document.document_element() {
        let offset = offset.clone();
        listeners.push(Listener::new(&root, "mouseleave", move |_event: MouseEvent| {
            offset.borrow_mut().reset();
        })?);
    }

    let ticker = Ticker::new(move |_now| {
        let vars = GlowVars::from_offset(offset.borrow_mut().step());
        for (property, value) in vars.properties() {
            let _ = dom::set_style(&card, property, &value);
        }
        Next::Frame
    });
    ticker.start(Next::Frame);

    Ok(Some(GlowEffect {
        _listeners: listeners,
        _ticker: ticker,
    }))
}
