//! Theme picker rendered inside the Settings screen.
//!
//! One row per [`ThemeMode`] with a label, a description and a radio
//! marker. The row for the current mode is tinted with the primary color.

use egui::{Color32, RichText, Sense, Stroke};
use folio::{with_alpha, SystemAppearance, ThemeColors, ThemeMode, ThemeState};

const SELECTED_TINT_ALPHA: u8 = 0x20;
const RADIO_SIZE: f32 = 20.0;

/// Row label; the System row names what the system currently resolves to
pub fn option_label(mode: ThemeMode, appearance: SystemAppearance) -> String {
    match mode {
        ThemeMode::System => format!("{} ({})", mode.label(), appearance.label()),
        _ => mode.label().to_string(),
    }
}

/// Background of a row
pub fn option_fill(selected: bool, palette: &ThemeColors) -> Color32 {
    if selected {
        with_alpha(palette.primary, SELECTED_TINT_ALPHA)
    } else {
        Color32::TRANSPARENT
    }
}

/// Renders the picker.
///
/// # Returns
/// * `Option<ThemeMode>` - The mode the user clicked, if any
pub fn render_theme_toggle(ui: &mut egui::Ui, theme: &ThemeState) -> Option<ThemeMode> {
    let palette = theme.palette;
    let mut chosen = None;

    ui.label(RichText::new("Theme").size(14.0).color(palette.text_secondary));
    ui.add_space(4.0);

    for mode in ThemeMode::ALL {
        let selected = theme.theme_mode == mode;

        let row = egui::Frame::default()
            .fill(option_fill(selected, palette))
            .stroke(Stroke::new(1.0, palette.border))
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(option_label(mode, theme.system_appearance))
                                .size(16.0)
                                .color(palette.text),
                        );
                        ui.label(RichText::new(mode.description()).size(14.0).color(palette.text_secondary));
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        render_radio(ui, selected, palette);
                    });
                });
            });

        let response = row.response.interact(Sense::click());
        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            chosen = Some(mode);
        }
        ui.add_space(8.0);
    }

    chosen
}

fn render_radio(ui: &mut egui::Ui, selected: bool, palette: &ThemeColors) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(RADIO_SIZE, RADIO_SIZE), Sense::hover());
    let ring = if selected { palette.primary } else { palette.border };
    let painter = ui.painter();

    painter.circle_stroke(rect.center(), RADIO_SIZE / 2.0 - 1.0, Stroke::new(2.0, ring));
    if selected {
        painter.circle_filled(rect.center(), 4.0, palette.primary);
    }
}
