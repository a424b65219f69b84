// SPDX-License-Identifier: MPL-2.0
//! Disclosure (expand/collapse) state.

/// Open and hover state of a collapsible panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub open: bool,
    pub hovered: bool,
}

impl Disclosure {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flips the open state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn hover(&mut self) {
        self.hovered = true;
    }

    pub fn unhover(&mut self) {
        self.hovered = false;
    }

    /// Chevron glyph for the header.
    #[must_use]
    pub fn chevron(&self) -> &'static str {
        if self.open {
            "▾"
        } else {
            "▸"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_not_hovered() {
        let state = Disclosure::default();
        assert!(!state.open);
        assert!(!state.hovered);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut state = Disclosure::default();
        assert!(state.toggle());
        assert!(!state.toggle());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut state = Disclosure::default();
        state.open();
        state.open();
        assert!(state.open);
        state.close();
        state.close();
        assert!(!state.open);
    }

    #[test]
    fn hover_is_independent_of_open() {
        let mut state = Disclosure::default();
        state.hover();
        assert!(state.hovered && !state.open);
        state.toggle();
        state.unhover();
        assert!(!state.hovered && state.open);
        assert_eq!(state.chevron(), "▾");
    }
}
