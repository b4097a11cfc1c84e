//! The four tab screens and the layout pieces they share.
//!
//! Screens are static: they read the palette and draw fixed text.

pub mod dashboard;
pub mod holdings;
pub mod accounts;
pub mod settings;

use egui::{RichText, Stroke};
use folio::{with_alpha, ThemeColors};

/// Large bold screen title
pub fn title(ui: &mut egui::Ui, text: &str, size: f32, palette: &ThemeColors) {
    ui.label(RichText::new(text).size(size).strong().color(palette.text));
    ui.add_space(8.0);
}

/// Secondary line under a title
pub fn subtitle(ui: &mut egui::Ui, text: &str, palette: &ThemeColors) {
    ui.label(RichText::new(text).size(16.0).color(palette.text_secondary));
}

/// Rounded surface panel with a soft shadow
pub fn card_frame(palette: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(palette.surface)
        .corner_radius(8.0)
        .inner_margin(16.0)
        .shadow(egui::Shadow {
            offset: [0, 2],
            blur: 4,
            spread: 0,
            color: with_alpha(palette.shadow, 26),
        })
}

/// Rounded surface panel outlined with the border color
pub fn section_frame(palette: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(palette.surface)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(8.0)
        .inner_margin(16.0)
}

/// Title and subtitle centered in the available space
pub fn centered_message(ui: &mut egui::Ui, heading: &str, message: &str, palette: &ThemeColors) {
    let top_space = (ui.available_height() / 2.0 - 40.0).max(0.0);
    ui.add_space(top_space);
    ui.vertical_centered(|ui| {
        title(ui, heading, 24.0, palette);
        subtitle(ui, message, palette);
    });
}
