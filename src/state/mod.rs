//! State management modules for the Folio app shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme scope (the installed theme preference store)
//! - Navigation state (selected tab)

mod theme_scope;
mod navigation_state;

pub use theme_scope::ThemeScope;
pub use navigation_state::NavigationState;
