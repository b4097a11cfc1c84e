//! Theme modes, color palettes, and theme resolution.
//!
//! The app ships exactly two palettes, [`LIGHT_PALETTE`] and [`DARK_PALETTE`].
//! Which one is rendered is decided by [`resolve`] from the user's
//! [`ThemeMode`] preference and the operating system's [`SystemAppearance`].
//!
//! # Examples
//!
//! ```
//! use folio::theme::{resolve, SystemAppearance, ThemeMode, DARK_PALETTE};
//!
//! let resolved = resolve(ThemeMode::System, SystemAppearance::Dark);
//! assert!(resolved.is_dark);
//! assert_eq!(*resolved.palette, DARK_PALETTE);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's stored theme preference.
///
/// This is the preference, not the rendered palette: `System` defers to
/// the operating system's appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in the order they are offered to the user
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// The literal string persisted for this mode
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Short label shown in the theme picker
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// One-line explanation shown under the label
    pub fn description(self) -> &'static str {
        match self {
            ThemeMode::Light => "Always use light theme",
            ThemeMode::Dark => "Always use dark theme",
            ThemeMode::System => "Follow system preference",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the persisted mode literals
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme mode '{0}' (expected light, dark or system)")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// The operating system's light/dark preference as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SystemAppearance {
    Light,
    Dark,
    /// The platform did not report a preference
    #[default]
    Unknown,
}

impl SystemAppearance {
    /// Maps egui's view of the system theme, where `None` means unreported
    pub fn from_egui(theme: Option<egui::Theme>) -> Self {
        match theme {
            Some(egui::Theme::Dark) => SystemAppearance::Dark,
            Some(egui::Theme::Light) => SystemAppearance::Light,
            None => SystemAppearance::Unknown,
        }
    }

    /// Label used when describing what "System" currently means.
    ///
    /// An unknown appearance renders as light, matching [`resolve`].
    pub fn label(self) -> &'static str {
        match self {
            SystemAppearance::Dark => "Dark",
            SystemAppearance::Light | SystemAppearance::Unknown => "Light",
        }
    }
}

/// Content style of the status bar.
///
/// `Light` means light content, used on dark backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    Light,
    Dark,
}

impl StatusBarStyle {
    /// The style that stays readable on the resolved background
    pub fn for_dark_background(is_dark: bool) -> Self {
        if is_dark {
            StatusBarStyle::Light
        } else {
            StatusBarStyle::Dark
        }
    }
}

/// Named colors every screen draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub primary: Color32,
    pub accent: Color32,
    pub border: Color32,
    pub shadow: Color32,
}

pub const LIGHT_PALETTE: ThemeColors = ThemeColors {
    background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    surface: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x00, 0x00, 0x00),
    text_secondary: Color32::from_rgb(0x66, 0x66, 0x66),
    primary: Color32::from_rgb(0x62, 0x00, 0xee),
    accent: Color32::from_rgb(0x03, 0xda, 0xc6),
    border: Color32::from_rgb(0xe0, 0xe0, 0xe0),
    shadow: Color32::from_rgb(0x00, 0x00, 0x00),
};

pub const DARK_PALETTE: ThemeColors = ThemeColors {
    background: Color32::from_rgb(0x12, 0x12, 0x12),
    surface: Color32::from_rgb(0x1e, 0x1e, 0x1e),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    text_secondary: Color32::from_rgb(0xbb, 0xbb, 0xbb),
    primary: Color32::from_rgb(0xbb, 0x86, 0xfc),
    accent: Color32::from_rgb(0x03, 0xda, 0xc6),
    border: Color32::from_rgb(0x33, 0x33, 0x33),
    shadow: Color32::from_rgb(0x00, 0x00, 0x00),
};

/// Palette and darkness flag derived from a mode and a system appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub palette: &'static ThemeColors,
    pub is_dark: bool,
}

/// Resolves the palette to render.
///
/// Explicit modes ignore the system appearance. `System` follows it, with
/// an unknown appearance treated as light.
pub fn resolve(mode: ThemeMode, appearance: SystemAppearance) -> ResolvedTheme {
    let is_dark = match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => appearance == SystemAppearance::Dark,
    };

    ResolvedTheme {
        palette: if is_dark { &DARK_PALETTE } else { &LIGHT_PALETTE },
        is_dark,
    }
}

/// Applies a palette's colors on top of egui's stock visuals
pub fn apply_palette(palette: &ThemeColors, visuals: &mut egui::Visuals) {
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.surface;

    visuals.override_text_color = Some(palette.text);

    visuals.selection.bg_fill = with_alpha(palette.primary, 0x40);
    visuals.selection.stroke.color = palette.primary;

    visuals.widgets.noninteractive.bg_fill = palette.surface;
    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_fill = palette.surface;
    visuals.widgets.hovered.bg_fill = palette.border;
    visuals.widgets.active.bg_fill = with_alpha(palette.primary, 0x40);

    visuals.hyperlink_color = palette.accent;
    visuals.window_stroke.color = palette.border;
}

/// Builds egui visuals for a resolved theme
pub fn visuals_for(resolved: ResolvedTheme) -> egui::Visuals {
    let mut visuals = if resolved.is_dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    apply_palette(resolved.palette, &mut visuals);
    visuals
}

/// Returns `color` with its alpha channel replaced
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
