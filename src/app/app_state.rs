//! Centralized application state for the Folio shell.
//!
//! Composes focused state components that each manage one aspect of the
//! application, keeping invariants local and allowing borrow-checker
//! friendly access to different parts.

use folio::ThemePreferenceStore;

use crate::state::{NavigationState, ThemeScope};

/// Main application state composed of focused state components.
#[derive(Debug, Default)]
pub struct AppState {
    /// Installed theme preference store
    pub theme: ThemeScope,

    /// Selected tab
    pub navigation: NavigationState,
}

impl AppState {
    /// Creates an application state with no theme store installed yet.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an application state around an already started theme store.
    pub fn with_theme(store: ThemePreferenceStore) -> Self {
        Self {
            theme: ThemeScope::new(store),
            navigation: NavigationState::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{AppearanceMonitor, AsyncStorage, MemoryStore, StatusBarHandle, SystemAppearance};
    use std::rc::Rc;
    use std::sync::Arc;

    #[test]
    #[should_panic(expected = "outside the application scope")]
    fn reading_theme_before_install_panics() {
        let state = AppState::new();
        let _ = state.theme.state();
    }

    #[test]
    fn installed_store_is_reachable() {
        let storage = Rc::new(AsyncStorage::new(Arc::new(MemoryStore::new())).unwrap());
        let monitor = AppearanceMonitor::new(SystemAppearance::Dark);
        let store = ThemePreferenceStore::start(storage, &monitor, Rc::new(StatusBarHandle::default()));

        let mut state = AppState::new();
        assert!(!state.theme.is_installed());
        state.theme.install(store);
        assert!(state.theme.state().is_dark);
    }
}
