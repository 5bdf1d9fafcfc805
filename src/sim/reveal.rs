//! Reveal-on-scroll bookkeeping
//!
//! An element is revealed the first time it intersects and stays revealed.

/// Tracks which observed elements have been revealed (by observation index)
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Feed one intersection entry; true when the element should be revealed now
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if intersecting && !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    /// Everything has been revealed; the observer can be disconnected
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        // Re-entering does nothing, leaving never un-reveals
        assert!(!tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.revealed_count(), 1);
        assert!(!tracker.is_complete());
        assert!(tracker.observe(1, true));
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_unknown_index_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(5, true));
        assert!(!tracker.is_revealed(5));
    }
}
