//! 3D tilt for every `main.card`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::dom;
use crate::platform::{Listener, Next, Ticker};
use crate::sim::{TiltState, normalized_offset};

const SELECTOR: &str = "main.card";

/// Tilt for one card, with its own frame loop
pub struct TiltEffect {
    _listeners: Vec<Listener>,
    _ticker: Ticker,
}

fn init_card(card: HtmlElement) -> Result<TiltEffect, JsValue> {
    let state = Rc::new(RefCell::new(TiltState::new()));

    let listeners = vec![
        {
            let state = state.clone();
            Listener::new(&card, "mouseenter", move |_event: MouseEvent| {
                state.borrow_mut().enter();
            })?
        },
        {
            let state = state.clone();
            let target = card.clone();
            Listener::new(&card, "mousemove", move |event: MouseEvent| {
                let (min, size) = dom::client_rect(&target);
                state
                    .borrow_mut()
                    .pointer(normalized_offset(dom::client_pos(&event), min, size));
            })?
        },
        {
            let state = state.clone();
            Listener::new(&card, "mouseleave", move |_event: MouseEvent| {
                state.borrow_mut().leave();
            })?
        },
    ];

    let ticker = Ticker::new(move |_now| {
        let frame = state.borrow_mut().step();
        let _ = dom::set_style(&card, "transform", &frame.transform_css());
        let _ = dom::set_style(&card, "box-shadow", &frame.box_shadow_css());
        Next::Frame
    });
    ticker.start(Next::Frame);

    Ok(TiltEffect {
        _listeners: listeners,
        _ticker: ticker,
    })
}

pub fn init(document: &Document) -> Result<Option<Vec<TiltEffect>>, JsValue> {
    let cards = dom::query_all_html(document, SELECTOR)?;
    if cards.is_empty() {
        return Ok(None);
    }
    let effects = cards
        .into_iter()
        .map(init_card)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(effects))
}
