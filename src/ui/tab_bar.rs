//! Tab bar UI rendering
//!
//! One evenly spaced entry per screen, tinted by selection state.

use egui::RichText;
use folio::{Tab, TabBarStyle};

/// Renders the tab bar.
///
/// # Returns
/// * `Option<Tab>` - The tab the user clicked, if any
pub fn render_tab_bar(ui: &mut egui::Ui, selected: Tab, style: &TabBarStyle) -> Option<Tab> {
    let mut clicked = None;

    ui.columns(Tab::ALL.len(), |columns| {
        for (column, tab) in columns.iter_mut().zip(Tab::ALL) {
            column.vertical_centered(|ui| {
                let active = tab == selected;
                let mut text = RichText::new(tab.tab_label()).color(style.tint(active));
                if active {
                    text = text.strong();
                }

                if ui.selectable_label(active, text).clicked() {
                    clicked = Some(tab);
                }
            });
        }
    });

    clicked
}
