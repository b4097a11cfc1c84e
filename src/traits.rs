//! Contracts for the collaborators the theme store talks to.
//!
//! The store never touches the filesystem, the OS, or the window directly.
//! Each of those concerns sits behind one of the traits below so the store
//! can be driven by real implementations in the GUI and by in-memory ones
//! in tests.

use crate::listeners::Subscription;
use crate::theme::{StatusBarStyle, SystemAppearance};

/// Storage key under which the theme mode is persisted
pub const THEME_STORAGE_KEY: &str = "theme_mode";

/// Durable string key-value storage.
///
/// Implementations are called from the background storage worker, so they
/// must be shareable across threads. Calls are expected to be fast local
/// operations; there is no timeout policy.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Callback invoked with every new system appearance
pub type AppearanceListener = Box<dyn Fn(SystemAppearance)>;

/// Source of the operating system's light/dark preference.
pub trait AppearanceSource {
    /// Point-in-time query of the current appearance
    fn current_appearance(&self) -> SystemAppearance;

    /// Registers `listener` for every subsequent appearance change.
    ///
    /// The listener stays registered until the returned handle is
    /// unsubscribed or dropped.
    fn subscribe(&self, listener: AppearanceListener) -> Subscription;
}

/// Control over the status bar's content style.
///
/// Setting the same style repeatedly is harmless.
pub trait StatusBarControl {
    fn set_style(&self, style: StatusBarStyle);
}
