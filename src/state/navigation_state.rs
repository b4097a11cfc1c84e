//! Selected-tab state.

use folio::Tab;

/// Which tab is showing, and whether the user has picked one this session
#[derive(Debug, Default)]
pub struct NavigationState {
    selected: Tab,
    user_navigated: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    /// Selects `tab` on behalf of the user.
    ///
    /// Returns true if the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        self.user_navigated = true;
        let changed = self.selected != tab;
        self.selected = tab;
        changed
    }

    /// Applies the tab remembered from the previous session.
    ///
    /// Ignored once the user has navigated, so a slow read never yanks the
    /// user off the screen they chose.
    pub fn restore(&mut self, tab: Tab) -> bool {
        if self.user_navigated {
            return false;
        }
        self.selected = tab;
        true
    }
}
