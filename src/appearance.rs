//! Operating-system appearance tracking.
//!
//! [`AppearanceMonitor`] is seeded from a direct OS query and then fed the
//! appearance egui reports each frame. Subscribers hear about a value only
//! when it differs from the previous one.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use std::cell::Cell;
use tracing::debug;

use crate::listeners::{ListenerSet, Subscription};
use crate::theme::SystemAppearance;
use crate::traits::{AppearanceListener, AppearanceSource};

/// Queries the OS for its current light/dark preference.
///
/// Platforms without a preference report `Unknown`.
pub fn detect_os_appearance() -> SystemAppearance {
    match detect_os_theme() {
        OsThemeMode::Dark => SystemAppearance::Dark,
        OsThemeMode::Light => SystemAppearance::Light,
        #[allow(unreachable_patterns)]
        _ => SystemAppearance::Unknown,
    }
}

/// Latest known system appearance plus its change listeners
#[derive(Debug)]
pub struct AppearanceMonitor {
    current: Cell<SystemAppearance>,
    listeners: ListenerSet<SystemAppearance>,
}

impl AppearanceMonitor {
    /// Creates a monitor starting from `initial`
    pub fn new(initial: SystemAppearance) -> Self {
        Self {
            current: Cell::new(initial),
            listeners: ListenerSet::new(),
        }
    }

    /// Creates a monitor seeded from the OS
    pub fn from_os() -> Self {
        Self::new(detect_os_appearance())
    }

    /// Records a newly observed appearance.
    ///
    /// Returns true if it differed from the previous value, in which case
    /// every subscriber has been notified.
    pub fn publish(&self, appearance: SystemAppearance) -> bool {
        if self.current.get() == appearance {
            return false;
        }

        debug!(from = ?self.current.get(), to = ?appearance, "system appearance changed");
        self.current.set(appearance);
        self.listeners.notify(&appearance);
        true
    }

    /// Feeds the value egui reports for the current frame.
    ///
    /// Frames where the platform reports nothing are ignored so a known
    /// appearance is not overwritten by a transient gap.
    pub fn observe_egui(&self, theme: Option<egui::Theme>) -> bool {
        match SystemAppearance::from_egui(theme) {
            SystemAppearance::Unknown => false,
            appearance => self.publish(appearance),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for AppearanceMonitor {
    fn default() -> Self {
        Self::new(SystemAppearance::Unknown)
    }
}

impl AppearanceSource for AppearanceMonitor {
    fn current_appearance(&self) -> SystemAppearance {
        self.current.get()
    }

    fn subscribe(&self, listener: AppearanceListener) -> Subscription {
        self.listeners.subscribe(move |appearance| listener(*appearance))
    }
}
