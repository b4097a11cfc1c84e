use anyhow::{anyhow, Result};
use folio::{
    AppearanceMonitor, AsyncStorage, JsonFileStore, KeyValueStore, MemoryStore, StatusBarHandle,
    StatusBarStyle, SystemAppearance, ThemeMode, ThemePreferenceStore, DARK_PALETTE, LIGHT_PALETTE,
    THEME_STORAGE_KEY,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Store whose every operation fails
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("disk unavailable"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("disk unavailable"))
    }
}

struct Harness {
    store: ThemePreferenceStore,
    monitor: AppearanceMonitor,
    status_bar: Rc<StatusBarHandle>,
}

fn start_with(backend: Arc<dyn KeyValueStore>, appearance: SystemAppearance) -> Harness {
    let storage = Rc::new(AsyncStorage::new(backend).unwrap());
    let monitor = AppearanceMonitor::new(appearance);
    let status_bar = Rc::new(StatusBarHandle::default());
    let store = ThemePreferenceStore::start(storage, &monitor, status_bar.clone());
    Harness { store, monitor, status_bar }
}

fn started(backend: Arc<dyn KeyValueStore>, appearance: SystemAppearance) -> Harness {
    let harness = start_with(backend, appearance);
    harness.store.wait_for_pending();
    harness
}

#[test]
fn test_explicit_modes_ignore_system_appearance() {
    for appearance in [SystemAppearance::Light, SystemAppearance::Dark, SystemAppearance::Unknown] {
        let h = started(Arc::new(MemoryStore::new()), appearance);

        h.store.set_theme_mode(ThemeMode::Light);
        assert!(!h.store.is_dark());
        assert!(std::ptr::eq(h.store.palette(), &LIGHT_PALETTE));

        h.store.set_theme_mode(ThemeMode::Dark);
        assert!(h.store.is_dark());
        assert!(std::ptr::eq(h.store.palette(), &DARK_PALETTE));
    }
}

#[test]
fn test_system_mode_follows_appearance() {
    let h = started(Arc::new(MemoryStore::new()), SystemAppearance::Dark);
    assert_eq!(h.store.theme_mode(), ThemeMode::System);
    assert!(h.store.is_dark());

    h.monitor.publish(SystemAppearance::Light);
    assert!(!h.store.is_dark());

    h.monitor.publish(SystemAppearance::Unknown);
    assert!(!h.store.is_dark());
    assert_eq!(h.store.state().system_appearance, SystemAppearance::Unknown);
}

#[test]
fn test_each_mode_survives_restart() {
    for mode in ThemeMode::ALL {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        let first = started(backend.clone(), SystemAppearance::Light);
        first.store.set_theme_mode(mode);
        first.store.wait_for_pending();
        assert_eq!(backend.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some(mode.as_str()));
        drop(first);

        let second = started(backend, SystemAppearance::Light);
        assert_eq!(second.store.theme_mode(), mode);
    }
}

#[test]
fn test_repeated_choice_is_idempotent() {
    let h = started(Arc::new(MemoryStore::new()), SystemAppearance::Light);
    let changes = Rc::new(RefCell::new(0));
    let seen = changes.clone();
    let _sub = h.store.subscribe(move |_| *seen.borrow_mut() += 1);

    h.store.set_theme_mode(ThemeMode::Dark);
    let state = h.store.state();
    let updates = h.status_bar.updates();

    h.store.set_theme_mode(ThemeMode::Dark);
    assert_eq!(h.store.state(), state);
    assert_eq!(*changes.borrow(), 1);
    // The status bar is reapplied on every explicit choice
    assert_eq!(h.status_bar.updates(), updates + 1);
    assert_eq!(h.status_bar.style(), StatusBarStyle::Light);
}

#[test]
fn test_startup_without_stored_value() {
    let h = started(Arc::new(MemoryStore::new()), SystemAppearance::Dark);
    let state = h.store.state();
    assert_eq!(state.theme_mode, ThemeMode::System);
    assert_eq!(state.system_appearance, SystemAppearance::Dark);
    assert!(state.is_dark);
    assert_eq!(h.status_bar.style(), StatusBarStyle::Light);
}

#[test]
fn test_startup_with_stored_dark() {
    let backend = Arc::new(MemoryStore::with_entries([(THEME_STORAGE_KEY, "dark")]));
    let h = start_with(backend, SystemAppearance::Light);

    // Before the read lands the store already answers with the default
    assert_eq!(h.store.theme_mode(), ThemeMode::System);
    assert!(!h.store.is_dark());

    h.store.wait_for_pending();
    assert!(!h.store.is_loading());
    assert_eq!(h.store.theme_mode(), ThemeMode::Dark);
    assert!(h.store.is_dark());
    assert_eq!(h.status_bar.style(), StatusBarStyle::Light);
}

#[test]
fn test_appearance_change_only_matters_in_system_mode() {
    let h = started(Arc::new(MemoryStore::new()), SystemAppearance::Light);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = h.store.subscribe(move |state| sink.borrow_mut().push(state.is_dark));

    h.monitor.publish(SystemAppearance::Dark);
    assert!(h.store.is_dark());

    h.store.set_theme_mode(ThemeMode::Light);
    h.monitor.publish(SystemAppearance::Light);
    h.monitor.publish(SystemAppearance::Dark);
    assert!(!h.store.is_dark());
    assert_eq!(h.store.state().system_appearance, SystemAppearance::Dark);

    // After the explicit choice every published state stays light
    let seen = seen.borrow();
    assert_eq!(seen[..2], [true, false]);
    assert!(seen[2..].iter().all(|dark| !dark));
}

#[test]
fn test_unrecognized_stored_value_is_ignored() {
    let backend = Arc::new(MemoryStore::with_entries([(THEME_STORAGE_KEY, "blue")]));
    let h = started(backend, SystemAppearance::Dark);
    assert_eq!(h.store.theme_mode(), ThemeMode::System);
    assert!(h.store.is_dark());
}

#[test]
fn test_storage_failure_keeps_in_memory_mode() {
    let h = started(Arc::new(BrokenStore), SystemAppearance::Light);
    assert_eq!(h.store.theme_mode(), ThemeMode::System);

    h.store.set_theme_mode(ThemeMode::Dark);
    h.store.wait_for_pending();
    assert_eq!(h.store.pending_writes(), 0);
    assert_eq!(h.store.theme_mode(), ThemeMode::Dark);
    assert!(h.store.is_dark());
}

#[test]
fn test_user_choice_wins_over_late_startup_read() {
    let backend = Arc::new(MemoryStore::with_entries([(THEME_STORAGE_KEY, "light")]));
    let h = start_with(backend, SystemAppearance::Light);

    h.store.set_theme_mode(ThemeMode::Dark);
    h.store.wait_for_pending();
    assert_eq!(h.store.theme_mode(), ThemeMode::Dark);
}

#[test]
fn test_json_file_store_persists_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    {
        let h = started(Arc::new(JsonFileStore::new(&path)), SystemAppearance::Light);
        h.store.set_theme_mode(ThemeMode::Dark);
        h.store.wait_for_pending();
    }
    assert!(path.exists());

    let h = started(Arc::new(JsonFileStore::new(&path)), SystemAppearance::Light);
    assert_eq!(h.store.theme_mode(), ThemeMode::Dark);
    assert!(h.store.is_dark());
}

#[test]
fn test_dropped_subscription_stops_notifications() {
    let h = started(Arc::new(MemoryStore::new()), SystemAppearance::Light);
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    let sub = h.store.subscribe(move |_| *sink.borrow_mut() += 1);

    h.store.set_theme_mode(ThemeMode::Dark);
    sub.unsubscribe();
    h.store.set_theme_mode(ThemeMode::Light);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_status_bar_follows_appearance_only_in_system_mode() {
    let h = started(Arc::new(MemoryStore::new()), SystemAppearance::Light);
    // Initial style emitted once at startup
    assert_eq!(h.status_bar.updates(), 1);
    assert_eq!(h.status_bar.style(), StatusBarStyle::Dark);

    h.monitor.publish(SystemAppearance::Dark);
    assert_eq!(h.status_bar.updates(), 2);
    assert_eq!(h.status_bar.style(), StatusBarStyle::Light);

    // Same appearance again changes nothing
    h.monitor.publish(SystemAppearance::Dark);
    assert_eq!(h.status_bar.updates(), 2);

    h.store.set_theme_mode(ThemeMode::Light);
    assert_eq!(h.status_bar.updates(), 3);
    assert_eq!(h.status_bar.style(), StatusBarStyle::Dark);

    h.monitor.publish(SystemAppearance::Light);
    h.monitor.publish(SystemAppearance::Dark);
    assert_eq!(h.status_bar.updates(), 3);
    assert_eq!(h.status_bar.style(), StatusBarStyle::Dark);
}
