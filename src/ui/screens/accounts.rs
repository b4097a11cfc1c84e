//! Accounts screen placeholder.

use folio::ThemeColors;

pub fn render(ui: &mut egui::Ui, palette: &ThemeColors) {
    super::centered_message(ui, "Linked Accounts", "No accounts connected yet.", palette);
}
