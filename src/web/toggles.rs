//! Dropdown and FAQ toggles
//!
//! State lives in the markup (`aria-expanded`, `.open` on the panel named by
//! `aria-controls`), so each activation reads the group fresh, applies the
//! transition and writes it back.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

use super::dom;
use crate::platform::Listener;
use crate::sim::toggle::aria_expanded;
use crate::sim::{ToggleGroup, ToggleState};

/// Top-level dropdowns and nested FAQ questions are separate groups
const GROUPS: [&str; 2] = [".dropdown-toggle", ".faq-toggle"];
const OPEN_CLASS: &str = "open";

pub struct ToggleEffect {
    _listeners: Vec<Listener>,
}

fn panel_for(document: &Document, toggle: &Element) -> Option<Element> {
    let id = toggle.get_attribute("aria-controls")?;
    document.get_element_by_id(&id)
}

fn activate(document: &Document, toggles: &[Element], index: usize) {
    let panels: Vec<Option<Element>> = toggles.iter().map(|t| panel_for(document, t)).collect();
    let mut group = ToggleGroup::new(
        toggles
            .iter()
            .zip(&panels)
            .map(|(t, panel)| {
                let expanded = t.get_attribute("aria-expanded").as_deref() == Some("true");
                ToggleState::new(expanded, panel.is_some())
            })
            .collect(),
    );

    if !group.activate(index) {
        return;
    }

    for ((toggle, panel), state) in toggles.iter().zip(&panels).zip(group.states()) {
        let Some(panel) = panel else { continue };
        if let Err(e) = toggle.set_attribute("aria-expanded", aria_expanded(state.expanded)) {
            log::warn!("Failed to set aria-expanded: {:?}", e);
        }
        if let Err(e) = panel
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.expanded)
        {
            log::warn!("Failed to toggle panel: {:?}", e);
        }
    }
}

fn wire_group(document: &Document, selector: &str, listeners: &mut Vec<Listener>) -> Result<usize, JsValue> {
    let toggles: Rc<[Element]> = dom::query_all(document, selector)?.into();

    for (index, toggle) in toggles.iter().enumerate() {
        {
            let document = document.clone();
            let toggles = toggles.clone();
            listeners.push(Listener::new(toggle, "click", move |event: MouseEvent| {
                event.prevent_default();
                activate(&document, &toggles, index);
            })?);
        }

        // Enter / Space behave like a click
        if let Some(html) = toggle.dyn_ref::<HtmlElement>() {
            let html = html.clone();
            listeners.push(Listener::new(toggle, "keydown", move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "Enter" | " ") {
                    event.prevent_default();
                    html.click();
                }
            })?);
        }
    }

    Ok(toggles.len())
}

pub fn init(document: &Document) -> Result<Option<ToggleEffect>, JsValue> {
    let mut listeners = Vec::new();
    let mut total = 0;
    for selector in GROUPS {
        total += wire_group(document, selector, &mut listeners)?;
    }
    if total == 0 {
        return Ok(None);
    }
    log::debug!("Wired {} toggles", total);
    Ok(Some(ToggleEffect {
        _listeners: listeners,
    }))
}
