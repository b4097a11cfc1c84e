//! Theme application and system-appearance plumbing.
//!
//! Bridges the theme store and egui: feeds egui's view of the system theme
//! into the appearance monitor, and pushes the resolved palette into egui's
//! visuals.

use folio::{visuals_for, AppearanceMonitor, ResolvedTheme, ThemeState};

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Forwards the system theme egui reports this frame to the monitor.
    ///
    /// Returns true if the system appearance changed.
    pub fn observe_system_theme(ctx: &egui::Context, monitor: &AppearanceMonitor) -> bool {
        monitor.observe_egui(ctx.system_theme())
    }

    /// Applies the resolved theme to the egui context.
    ///
    /// Called every frame so the palette is always in effect.
    pub fn apply_current_theme(ctx: &egui::Context, state: &ThemeState) {
        let theme = if state.is_dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        ctx.set_theme(theme);

        let resolved = ResolvedTheme {
            palette: state.palette,
            is_dark: state.is_dark,
        };
        ctx.set_visuals(visuals_for(resolved));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{SystemAppearance, ThemeMode, DARK_PALETTE};

    #[test]
    fn applies_resolved_palette_to_context() {
        let ctx = egui::Context::default();
        let state = ThemeState::resolve(ThemeMode::Dark, SystemAppearance::Light);

        ThemeCoordinator::apply_current_theme(&ctx, &state);

        let visuals = ctx.style().visuals.clone();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, DARK_PALETTE.background);
    }

    #[test]
    fn headless_context_reports_no_change() {
        let ctx = egui::Context::default();
        let monitor = AppearanceMonitor::new(SystemAppearance::Dark);
        assert!(!ThemeCoordinator::observe_system_theme(&ctx, &monitor));
    }
}
