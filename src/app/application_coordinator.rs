//! Application-level coordination of user interactions.
//!
//! Turns panel interactions into state changes and persistence requests.

use folio::{PendingOp, Tab, ThemeMode, SELECTED_TAB_KEY};
use tracing::{debug, warn};

use crate::app::{AppState, SettingsCoordinator};

/// Coordinates application-level operations.
///
/// This struct is responsible for:
/// - Switching tabs and remembering the selection
/// - Forwarding theme choices to the theme store
/// - Restoring the tab remembered from the last session
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Handles a tab bar click.
    pub fn handle_tab_selected(state: &mut AppState, settings: &mut SettingsCoordinator, tab: Tab) {
        if state.navigation.select(tab) {
            debug!(route = tab.route_name(), "tab selected");
            settings.save_setting(SELECTED_TAB_KEY, &tab);
        }
    }

    /// Handles a choice in the theme picker.
    pub fn handle_theme_mode_selected(state: &AppState, mode: ThemeMode) {
        state.theme.store().set_theme_mode(mode);
    }

    /// Checks whether the remembered tab has been read and applies it.
    ///
    /// Called once per frame; clears `pending` when the read finishes.
    pub fn check_tab_restore(state: &mut AppState, pending: &mut Option<PendingOp<Option<String>>>) {
        let Some(op) = pending.as_mut() else {
            return;
        };
        let Some(result) = op.try_complete() else {
            return;
        };
        *pending = None;

        match result {
            Ok(raw) => {
                if let Some(tab) = SettingsCoordinator::decode_setting::<Tab>(raw) {
                    if state.navigation.restore(tab) {
                        debug!(route = tab.route_name(), "restored selected tab");
                    }
                }
            }
            Err(e) => warn!(error = %e, "Failed to load selected tab"),
        }
    }
}
