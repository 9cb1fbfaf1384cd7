//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! The page has exactly one piece of interactive state: whether the mobile
//! navigation menu is expanded. It is owned by the navbar as an `RwSignal`
//! and never shared.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Mobile navigation menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip visibility (menu button tap).
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Collapse the menu (a menu link was followed).
    #[must_use]
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Accessible label for the menu button.
    pub fn button_label(self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}
