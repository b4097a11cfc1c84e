//! Status bar UI rendering
//!
//! The bottom strip whose content style is set by the theme store through
//! [`StatusBarHandle`].

use egui::{Color32, RichText};
use folio::{StatusBarHandle, StatusBarStyle, ThemeState};

/// Text color for a status-bar content style
pub fn content_color(style: StatusBarStyle) -> Color32 {
    match style {
        StatusBarStyle::Light => Color32::from_gray(240),
        StatusBarStyle::Dark => Color32::from_gray(24),
    }
}

/// Renders the status bar
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `handle` - Style most recently requested by the theme store
/// * `theme` - Current theme snapshot
pub fn render_status_bar(ui: &mut egui::Ui, handle: &StatusBarHandle, theme: &ThemeState) {
    let color = content_color(handle.style());

    ui.horizontal(|ui| {
        ui.label(RichText::new(folio::config::APP_NAME).small().strong().color(color));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let resolved = if theme.is_dark { "dark" } else { "light" };
            ui.label(
                RichText::new(format!("Theme: {} ({})", theme.theme_mode.label(), resolved))
                    .small()
                    .color(color),
            );
        });
    });
}
