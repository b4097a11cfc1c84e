//! Status-bar style holder read by the window's bottom bar.

use std::cell::Cell;

use crate::theme::StatusBarStyle;
use crate::traits::StatusBarControl;

/// Remembers the last requested status-bar style
#[derive(Debug)]
pub struct StatusBarHandle {
    style: Cell<StatusBarStyle>,
    updates: Cell<u64>,
}

impl StatusBarHandle {
    pub fn new(initial: StatusBarStyle) -> Self {
        Self {
            style: Cell::new(initial),
            updates: Cell::new(0),
        }
    }

    /// Style requested most recently
    pub fn style(&self) -> StatusBarStyle {
        self.style.get()
    }

    /// Number of `set_style` calls received so far
    pub fn updates(&self) -> u64 {
        self.updates.get()
    }
}

impl Default for StatusBarHandle {
    fn default() -> Self {
        Self::new(StatusBarStyle::Dark)
    }
}

impl StatusBarControl for StatusBarHandle {
    fn set_style(&self, style: StatusBarStyle) {
        self.style.set(style);
        self.updates.set(self.updates.get() + 1);
    }
}
