pub mod traits;
pub mod theme;
pub mod listeners;
pub mod appearance;
pub mod status_bar;
pub mod io;
pub mod theme_store;
pub mod navigation;
pub mod config;

// Export collaborator contracts
pub use traits::{
    KeyValueStore, AppearanceSource, AppearanceListener, StatusBarControl,
    THEME_STORAGE_KEY
};

// Export theme model
pub use theme::{
    ThemeMode, ThemeColors, SystemAppearance, StatusBarStyle, ResolvedTheme,
    ParseThemeModeError, LIGHT_PALETTE, DARK_PALETTE, resolve, apply_palette, visuals_for, with_alpha
};

// Export the store and its collaborators
pub use theme_store::{ThemePreferenceStore, ThemeState};
pub use listeners::{ListenerSet, ListenerId, Subscription};
pub use appearance::{AppearanceMonitor, detect_os_appearance};
pub use status_bar::StatusBarHandle;
pub use io::{AsyncStorage, PendingOp, JsonFileStore, MemoryStore};

// Export navigation and configuration
pub use navigation::{Tab, TabBarStyle, SELECTED_TAB_KEY};
pub use config::{AppConfig, Cli, StorageChoice};
