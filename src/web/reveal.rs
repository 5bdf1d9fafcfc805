//! Reveal-on-scroll for `.reveal` elements

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::sim::RevealTracker;

const SELECTOR: &str = ".reveal";
const REVEALED_CLASS: &str = "in";

pub struct RevealEffect {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealEffect {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn init(document: &Document) -> Result<Option<RevealEffect>, JsValue> {
    let elements = dom::query_all(document, SELECTOR)?;
    if elements.is_empty() {
        return Ok(None);
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let targets = elements.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut tracker = tracker.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.observe(index, entry.is_intersecting()) {
                    if let Err(e) = target.class_list().add_1(REVEALED_CLASS) {
                        log::warn!("Failed to reveal element: {:?}", e);
                    }
                    observer.unobserve(&target);
                }
            }
            if tracker.is_complete() {
                log::debug!("All {} reveal targets shown", tracker.revealed_count());
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for el in &elements {
        observer.observe(el);
    }

    Ok(Some(RevealEffect {
        observer,
        _callback: callback,
    }))
}
