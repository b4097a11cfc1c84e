//! Header panel UI rendering
//!
//! Shows the title of the selected screen.

use egui::RichText;
use folio::{Tab, TabBarStyle};

/// Renders the header title for `tab`
pub fn render_header(ui: &mut egui::Ui, tab: Tab, style: &TabBarStyle) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(tab.title()).size(18.0).strong().color(style.header_tint));
    });
}
