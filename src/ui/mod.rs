//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the Folio shell:
//! - Header panel (title of the selected screen)
//! - Tab bar (screen switching)
//! - Status bar (content style driven by the theme store)
//! - Screens (static Dashboard, Holdings, Accounts, Settings layouts)
//! - Theme toggle (light/dark/system picker)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod tab_bar;
pub mod status_bar;
pub mod theme_toggle;
pub mod screens;
pub mod panel_manager;
