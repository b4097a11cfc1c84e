//! Preference storage: concrete key-value stores and the background worker
//! that drives them off the UI thread.

pub mod async_storage;
pub mod file_store;

pub use async_storage::{AsyncStorage, PendingOp, Waker};
pub use file_store::{JsonFileStore, MemoryStore};
