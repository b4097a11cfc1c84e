//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting small application settings through
//! the shared storage worker. Values are stored as JSON strings, so any
//! serializable type can be kept under a key.

use folio::{AsyncStorage, PendingOp};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, warn};

/// Coordinates generic settings persistence.
///
/// Reads and writes go through the background storage worker; writes are
/// fire-and-forget and their outcome is logged by [`poll`](Self::poll).
pub struct SettingsCoordinator {
    storage: Rc<AsyncStorage>,
    pending_writes: Vec<PendingOp<()>>,
}

impl SettingsCoordinator {
    pub fn new(storage: Rc<AsyncStorage>) -> Self {
        Self {
            storage,
            pending_writes: Vec::new(),
        }
    }

    /// Issues a read of `key`; decode the result with [`Self::decode_setting`]
    pub fn request_setting(&self, key: &str) -> PendingOp<Option<String>> {
        self.storage.get(key)
    }

    /// Decodes a stored JSON string.
    ///
    /// # Returns
    /// `Some(value)` if present and valid, `None` otherwise
    pub fn decode_setting<T>(raw: Option<String>) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "ignoring undecodable setting");
                None
            }
        }
    }

    /// Decodes a stored JSON string with a custom default
    #[cfg(test)]
    pub fn decode_setting_or<T>(raw: Option<String>, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::decode_setting(raw).unwrap_or(default)
    }

    /// Queues a write of `value` as JSON under `key`
    pub fn save_setting<T>(&mut self, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => self.pending_writes.push(self.storage.set(key, &json_str)),
            Err(e) => warn!(key = %key, error = %e, "Failed to encode setting"),
        }
    }

    /// Logs the outcome of writes that have finished. Never blocks.
    pub fn poll(&mut self) {
        self.pending_writes.retain_mut(|op| match op.try_complete() {
            Some(result) => {
                log_outcome(op.key(), result);
                false
            }
            None => true,
        });
    }

    /// Waits for every queued write to finish
    pub fn flush(&mut self) {
        for op in self.pending_writes.drain(..) {
            let key = op.key().to_string();
            log_outcome(&key, op.wait());
        }
    }

    #[cfg(test)]
    pub fn pending_writes(&self) -> usize {
        self.pending_writes.len()
    }
}

fn log_outcome(key: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => debug!(key = %key, "setting saved"),
        Err(e) => warn!(key = %key, error = %e, "Failed to save setting"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{KeyValueStore, MemoryStore, Tab};
    use std::sync::Arc;

    fn coordinator_with(store: Arc<MemoryStore>) -> SettingsCoordinator {
        SettingsCoordinator::new(Rc::new(AsyncStorage::new(store).unwrap()))
    }

    #[test]
    fn test_save_and_load_simple() {
        let store = Arc::new(MemoryStore::new());
        let mut settings = coordinator_with(store.clone());

        settings.save_setting("test_key", &42i32);
        settings.flush();

        let raw = settings.request_setting("test_key").wait().unwrap();
        let loaded: i32 = SettingsCoordinator::decode_setting_or(raw, 0);
        assert_eq!(loaded, 42);
        assert_eq!(store.get("test_key").unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_load_with_default() {
        let settings = coordinator_with(Arc::new(MemoryStore::new()));
        let raw = settings.request_setting("missing_key").wait().unwrap();
        assert_eq!(SettingsCoordinator::decode_setting_or(raw, Tab::Dashboard), Tab::Dashboard);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let decoded: Option<Tab> = SettingsCoordinator::decode_setting(Some("\"portfolio\"".to_string()));
        assert_eq!(decoded, None);
        let decoded: Option<Tab> = SettingsCoordinator::decode_setting(Some("\"holdings\"".to_string()));
        assert_eq!(decoded, Some(Tab::Holdings));
    }

    #[test]
    fn test_poll_drains_finished_writes() {
        let mut settings = coordinator_with(Arc::new(MemoryStore::new()));
        settings.save_setting("selected_tab", &Tab::Settings);
        assert_eq!(settings.pending_writes(), 1);

        while settings.pending_writes() > 0 {
            settings.poll();
            std::thread::yield_now();
        }
    }
}
