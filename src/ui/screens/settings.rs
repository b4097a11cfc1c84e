//! Settings screen: the appearance section hosting the theme picker.

use egui::RichText;
use folio::{ThemeMode, ThemeState};

use super::{section_frame, subtitle, title};
use crate::ui::theme_toggle;

/// Renders the settings screen.
///
/// # Returns
/// * `Option<ThemeMode>` - Mode picked in the theme toggle, if any
pub fn render(ui: &mut egui::Ui, theme: &ThemeState) -> Option<ThemeMode> {
    let palette = theme.palette;
    let mut chosen = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        title(ui, "Settings", 24.0, palette);
        ui.vertical_centered(|ui| {
            subtitle(ui, "App settings and preferences", palette);
        });
        ui.add_space(24.0);

        section_frame(palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Appearance").size(18.0).strong().color(palette.text));
            ui.add_space(16.0);
            chosen = theme_toggle::render_theme_toggle(ui, theme);
        });
    });

    chosen
}
