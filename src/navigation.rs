//! Tabs of the app shell and the styling the tab container applies.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeColors;

/// Storage key remembering the last selected tab
pub const SELECTED_TAB_KEY: &str = "selected_tab";

/// One of the four top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "index")]
    Dashboard,
    #[serde(rename = "holdings")]
    Holdings,
    #[serde(rename = "accounts")]
    Accounts,
    #[serde(rename = "settings")]
    Settings,
}

impl Tab {
    /// Tabs in the order they appear in the tab bar
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Holdings, Tab::Accounts, Tab::Settings];

    /// Route name the screen is registered under
    pub fn route_name(self) -> &'static str {
        match self {
            Tab::Dashboard => "index",
            Tab::Holdings => "holdings",
            Tab::Accounts => "accounts",
            Tab::Settings => "settings",
        }
    }

    /// Title shown in the header
    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Holdings => "Holdings",
            Tab::Accounts => "Accounts",
            Tab::Settings => "Settings",
        }
    }

    /// Label shown in the tab bar
    pub fn tab_label(self) -> &'static str {
        self.title()
    }

    /// Looks a tab up by route name
    pub fn from_route(name: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.route_name() == name)
    }
}

/// Screen options the tab container applies, derived from the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarStyle {
    pub header_shown: bool,
    pub active_tint: Color32,
    pub inactive_tint: Color32,
    pub tab_bar_background: Color32,
    pub header_background: Color32,
    pub header_tint: Color32,
}

impl TabBarStyle {
    pub fn from_palette(palette: &ThemeColors) -> Self {
        Self {
            header_shown: true,
            active_tint: palette.primary,
            inactive_tint: palette.text_secondary,
            tab_bar_background: palette.surface,
            header_background: palette.surface,
            header_tint: palette.text,
        }
    }

    /// Label color for a tab in the given selection state
    pub fn tint(&self, active: bool) -> Color32 {
        if active {
            self.active_tint
        } else {
            self.inactive_tint
        }
    }
}
