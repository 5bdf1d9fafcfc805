//! Typewriter reveal for headlines
//!
//! Characters are Unicode scalar values, so multi-byte text types cleanly.

use crate::consts::{TYPING_CHAR_INTERVAL_MS, TYPING_START_DELAY_MS};

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Delay before the first character
    pub fn start_delay_ms(&self) -> u32 {
        TYPING_START_DELAY_MS
    }

    /// Reveal one more character
    ///
    /// Returns the delay until the next call, or `None` once the text is
    /// complete.
    pub fn advance(&mut self) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        self.revealed += 1;
        Some(TYPING_CHAR_INTERVAL_MS)
    }

    /// One scheduled tick; a headline no longer on the page ends the loop
    pub fn step(&mut self, connected: bool) -> Option<u32> {
        if !connected {
            return None;
        }
        self.advance()
    }

    /// Text visible right now
    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Character just revealed by the last `advance`
    pub fn last_char(&self) -> Option<char> {
        self.revealed.checked_sub(1).map(|i| self.chars[i])
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Time from start until the full text is showing
    pub fn total_duration_ms(&self) -> u32 {
        TYPING_START_DELAY_MS + TYPING_CHAR_INTERVAL_MS * self.chars.len() as u32
    }

    /// Text visible `elapsed_ms` after start, following the same schedule
    pub fn visible_at(text: &str, elapsed_ms: u32) -> String {
        let Some(typing) = elapsed_ms.checked_sub(TYPING_START_DELAY_MS) else {
            return String::new();
        };
        let count = (typing / TYPING_CHAR_INTERVAL_MS + 1) as usize;
        text.chars().take(count).collect()
    }
}
