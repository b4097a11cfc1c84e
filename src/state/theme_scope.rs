//! Theme store access for the application scope.
//!
//! The store is created by the application root once storage and the
//! appearance monitor exist. Screens reach it only through this scope.

use folio::{ThemePreferenceStore, ThemeState};

/// Holds the theme store installed by the application root.
#[derive(Debug, Default)]
pub struct ThemeScope {
    store: Option<ThemePreferenceStore>,
}

impl ThemeScope {
    /// Creates a scope with `store` already installed
    pub fn new(store: ThemePreferenceStore) -> Self {
        Self { store: Some(store) }
    }

    #[cfg(test)]
    pub fn install(&mut self, store: ThemePreferenceStore) {
        self.store = Some(store);
    }

    #[cfg(test)]
    pub fn is_installed(&self) -> bool {
        self.store.is_some()
    }

    /// The installed store.
    ///
    /// # Panics
    /// If called before a store was installed. Every consumer is rendered
    /// inside the application scope, so reaching this is a wiring bug.
    pub fn store(&self) -> &ThemePreferenceStore {
        match &self.store {
            Some(store) => store,
            None => panic!("theme store accessed outside the application scope; install it before rendering"),
        }
    }

    /// Current resolved theme snapshot
    pub fn state(&self) -> ThemeState {
        self.store().state()
    }
}
