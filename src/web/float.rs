//! Floating idle animation for the logo and value props

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::sim::float_timing;

const SELECTOR: &str = ".logo, .value-props li";

pub struct FloatingEffect {
    elements: Vec<HtmlElement>,
}

impl Drop for FloatingEffect {
    fn drop(&mut self) {
        for el in &self.elements {
            let _ = el.style().remove_property("animation");
        }
    }
}

pub fn init(document: &Document) -> Result<Option<FloatingEffect>, JsValue> {
    let elements = dom::query_all_html(document, SELECTOR)?;
    if elements.is_empty() {
        return Ok(None);
    }
    for (index, el) in elements.iter().enumerate() {
        dom::set_style(el, "animation", &float_timing(index).animation_css())?;
    }
    Ok(Some(FloatingEffect { elements }))
}
