//! Command line and startup configuration for the GUI.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::io::{JsonFileStore, MemoryStore};
use crate::traits::KeyValueStore;

pub const APP_NAME: &str = "Folio";

const PREFERENCES_DIR: &str = "folio";
const PREFERENCES_FILE: &str = "preferences.json";
const DEFAULT_LOG_FILTER: &str = "folio=info";

/// Command line of the `folio-gui` binary
#[derive(Debug, Parser)]
#[command(name = "folio-gui", version, about = "Portfolio tracker")]
pub struct Cli {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
    pub prefs: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Tracing filter directives, e.g. `folio=debug`; overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Where preferences are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageChoice {
    File(PathBuf),
    Memory,
}

/// Resolved startup configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub storage: StorageChoice,
    /// Explicit log filter; `None` defers to `RUST_LOG`
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// `<config_dir>/folio/preferences.json`, or a file in the working
    /// directory when the platform has no config directory
    pub fn default_preferences_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join(PREFERENCES_DIR).join(PREFERENCES_FILE),
            None => PathBuf::from("folio-preferences.json"),
        }
    }

    /// Filter used when neither `--log-filter` nor `RUST_LOG` is set
    pub fn default_log_filter() -> &'static str {
        DEFAULT_LOG_FILTER
    }

    /// Opens the configured key-value store
    pub fn open_store(&self) -> Arc<dyn KeyValueStore> {
        match &self.storage {
            StorageChoice::File(path) => Arc::new(JsonFileStore::new(path)),
            StorageChoice::Memory => Arc::new(MemoryStore::new()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: APP_NAME.to_string(),
            inner_size: [420.0, 760.0],
            storage: StorageChoice::File(Self::default_preferences_path()),
            log_filter: None,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let storage = if cli.ephemeral {
            StorageChoice::Memory
        } else {
            StorageChoice::File(cli.prefs.unwrap_or_else(Self::default_preferences_path))
        };

        Self {
            storage,
            log_filter: cli.log_filter,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_in_config_dir() {
        let config = AppConfig::from(Cli::try_parse_from(["folio-gui"]).unwrap());
        match config.storage {
            StorageChoice::File(path) => assert!(path.ends_with(PREFERENCES_FILE)),
            StorageChoice::Memory => panic!("expected file storage"),
        }
        assert_eq!(config.log_filter, None);
        assert_eq!(config.window_title, APP_NAME);
    }

    #[test]
    fn explicit_prefs_path_is_used() {
        let cli = Cli::try_parse_from(["folio-gui", "--prefs", "/tmp/p.json", "--log-filter", "folio=debug"]).unwrap();
        let config = AppConfig::from(cli);
        assert_eq!(config.storage, StorageChoice::File(PathBuf::from("/tmp/p.json")));
        assert_eq!(config.log_filter.as_deref(), Some("folio=debug"));
    }

    #[test]
    fn ephemeral_selects_memory() {
        let config = AppConfig::from(Cli::try_parse_from(["folio-gui", "--ephemeral"]).unwrap());
        assert_eq!(config.storage, StorageChoice::Memory);
    }

    #[test]
    fn ephemeral_conflicts_with_prefs() {
        assert!(Cli::try_parse_from(["folio-gui", "--ephemeral", "--prefs", "x.json"]).is_err());
    }
}
