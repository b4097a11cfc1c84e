//! Holdings screen placeholder.

use folio::ThemeColors;

pub fn render(ui: &mut egui::Ui, palette: &ThemeColors) {
    super::centered_message(
        ui,
        "Your Holdings",
        "No holdings yet. Connect an account to get started.",
        palette,
    );
}
