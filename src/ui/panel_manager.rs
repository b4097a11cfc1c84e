//! Panel orchestration and layout management.
//!
//! Lays out the header, the screen of the selected tab, the tab bar, and
//! the status bar, and reports what the user did.

use folio::{StatusBarHandle, Tab, TabBarStyle, ThemeMode};

use crate::app::AppState;
use crate::ui::{header, screens, status_bar, tab_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// A tab in the tab bar was clicked
    TabSelected(Tab),
    /// A theme mode was picked on the settings screen
    ThemeModeSelected(ThemeMode),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &AppState,
        status_bar_handle: &StatusBarHandle,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme = state.theme.state();
        let palette = theme.palette;
        let style = TabBarStyle::from_palette(palette);
        let selected = state.navigation.selected();

        if style.header_shown {
            egui::TopBottomPanel::top("header")
                .frame(egui::Frame::default().fill(style.header_background).inner_margin(12.0))
                .show(ctx, |ui| {
                    header::render_header(ui, selected, &style);
                });
        }

        // Status bar at the very bottom
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::default().fill(palette.surface).inner_margin(4.0))
            .show(ctx, |ui| {
                status_bar::render_status_bar(ui, status_bar_handle, &theme);
            });

        // Tab bar above the status bar
        egui::TopBottomPanel::bottom("tab_bar")
            .frame(egui::Frame::default().fill(style.tab_bar_background).inner_margin(8.0))
            .show(ctx, |ui| {
                if let Some(tab) = tab_bar::render_tab_bar(ui, selected, &style) {
                    interaction = Some(PanelInteraction::TabSelected(tab));
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(palette.background).inner_margin(16.0))
            .show(ctx, |ui| match selected {
                Tab::Dashboard => screens::dashboard::render(ui, palette),
                Tab::Holdings => screens::holdings::render(ui, palette),
                Tab::Accounts => screens::accounts::render(ui, palette),
                Tab::Settings => {
                    if let Some(mode) = screens::settings::render(ui, &theme) {
                        interaction = Some(PanelInteraction::ThemeModeSelected(mode));
                    }
                }
            });

        interaction
    }
}
