//! Exclusive expand/collapse groups (dropdowns, FAQ questions)
//!
//! Each toggle is binary. Activating one flips it and collapses every other
//! toggle in the same group; separate groups never affect each other.

/// One toggle as read from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub expanded: bool,
    /// The panel named by the toggle exists
    pub has_panel: bool,
}

impl ToggleState {
    pub fn new(expanded: bool, has_panel: bool) -> Self {
        Self {
            expanded,
            has_panel,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleGroup {
    toggles: Vec<ToggleState>,
}

impl ToggleGroup {
    pub fn new(toggles: Vec<ToggleState>) -> Self {
        Self { toggles }
    }

    /// Activate the toggle at `index`
    ///
    /// A toggle without a panel is inert. Returns whether anything changed.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(target) = self.toggles.get(index).copied() else {
            return false;
        };
        if !target.has_panel {
            return false;
        }

        for (i, toggle) in self.toggles.iter_mut().enumerate() {
            if i != index && toggle.has_panel {
                toggle.expanded = false;
            }
        }
        self.toggles[index].expanded = !target.expanded;
        true
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.toggles.get(index).is_some_and(|t| t.expanded)
    }

    pub fn states(&self) -> &[ToggleState] {
        &self.toggles
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

/// `aria-expanded` attribute value
pub fn aria_expanded(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}
