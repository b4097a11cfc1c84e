//! Dashboard screen: portfolio totals, all zero.

use egui::RichText;
use folio::ThemeColors;

use super::{card_frame, subtitle, title};
use crate::utils::format_inr;

/// Summary cards shown on the dashboard
const SUMMARY_CARDS: [&str; 2] = ["Total Portfolio Value", "Total P&L"];

pub fn render(ui: &mut egui::Ui, palette: &ThemeColors) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        title(ui, "Portfolio Dashboard", 28.0, palette);
        subtitle(ui, "Welcome to your portfolio tracker", palette);
        ui.add_space(24.0);

        for card in SUMMARY_CARDS {
            card_frame(palette).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(card).size(14.0).color(palette.text_secondary));
                ui.add_space(8.0);
                ui.label(RichText::new(format_inr(0.0)).size(24.0).strong().color(palette.text));
            });
            ui.add_space(16.0);
        }
    });
}
