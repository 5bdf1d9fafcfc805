//! Typewriter reveal for every `h1`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::dom;
use crate::platform::{Next, Ticker};
use crate::sim::Typewriter;

const SELECTOR: &str = "h1";

pub struct TypingEffect {
    headline: Element,
    text: String,
    ticker: Ticker,
}

impl Drop for TypingEffect {
    fn drop(&mut self) {
        // Torn down mid-animation: leave the full headline behind
        if self.ticker.is_running() {
            self.ticker.stop();
            self.headline.set_text_content(Some(&self.text));
        }
    }
}

fn init_headline(headline: Element) -> TypingEffect {
    let text = headline.text_content().unwrap_or_default();
    headline.set_text_content(Some(""));
    if let Some(html) = headline.dyn_ref::<HtmlElement>() {
        if let Err(e) = dom::set_style(html, "opacity", "1") {
            log::warn!("Failed to show headline: {:?}", e);
        }
    }

    let mut writer = Typewriter::new(&text);
    let first = Next::After(writer.start_delay_ms());
    let target = headline.clone();
    let ticker = Ticker::new(move |_now| {
        match writer.step(target.is_connected()) {
            Some(delay) => {
                target.set_text_content(Some(&writer.visible()));
                Next::After(delay)
            }
            None => Next::Done,
        }
    });
    ticker.start(first);

    TypingEffect {
        headline,
        text,
        ticker,
    }
}

pub fn init(document: &Document) -> Result<Option<Vec<TypingEffect>>, JsValue> {
    let headlines = dom::query_all(document, SELECTOR)?;
    if headlines.is_empty() {
        return Ok(None);
    }
    Ok(Some(headlines.into_iter().map(init_headline).collect()))
}
