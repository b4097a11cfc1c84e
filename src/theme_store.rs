//! The process-wide theme preference store.
//!
//! [`ThemePreferenceStore`] is the single source of truth for the user's
//! [`ThemeMode`] and the observed [`SystemAppearance`]. Everything a screen
//! draws with comes from [`ThemePreferenceStore::state`], which resolves the
//! palette on every call instead of caching it.
//!
//! The store is a cheap cloneable handle meant to live on the UI thread.
//! The application root creates it once and passes clones to every
//! consumer. Storage I/O is delegated to an [`AsyncStorage`] worker;
//! results are applied on the UI thread by [`ThemePreferenceStore::poll`].
//!
//! # Startup
//!
//! [`ThemePreferenceStore::start`] seeds the system appearance from the
//! [`AppearanceSource`], subscribes to its changes, pushes the initial
//! status-bar style, and issues the read of the stored mode. Until that
//! read completes the mode is [`ThemeMode::System`].
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use std::sync::Arc;
//! use folio::{AppearanceMonitor, AsyncStorage, MemoryStore, StatusBarHandle};
//! use folio::theme::{SystemAppearance, ThemeMode};
//! use folio::ThemePreferenceStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! let storage = Rc::new(AsyncStorage::new(Arc::new(MemoryStore::new()))?);
//! let monitor = AppearanceMonitor::new(SystemAppearance::Dark);
//! let store = ThemePreferenceStore::start(storage, &monitor, Rc::new(StatusBarHandle::default()));
//!
//! store.wait_for_pending();
//! assert_eq!(store.state().theme_mode, ThemeMode::System);
//! assert!(store.state().is_dark);
//!
//! store.set_theme_mode(ThemeMode::Light);
//! assert!(!store.state().is_dark);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::io::{AsyncStorage, PendingOp};
use crate::listeners::{ListenerSet, Subscription};
use crate::theme::{resolve, StatusBarStyle, SystemAppearance, ThemeColors, ThemeMode};
use crate::traits::{AppearanceSource, StatusBarControl, THEME_STORAGE_KEY};

/// Resolved snapshot handed to consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub palette: &'static ThemeColors,
    pub theme_mode: ThemeMode,
    pub system_appearance: SystemAppearance,
    pub is_dark: bool,
}

impl ThemeState {
    /// Derives the snapshot for a mode and appearance
    pub fn resolve(theme_mode: ThemeMode, system_appearance: SystemAppearance) -> Self {
        let resolved = resolve(theme_mode, system_appearance);
        Self {
            palette: resolved.palette,
            theme_mode,
            system_appearance,
            is_dark: resolved.is_dark,
        }
    }

    /// Status-bar style matching this snapshot's background
    pub fn status_bar_style(&self) -> StatusBarStyle {
        StatusBarStyle::for_dark_background(self.is_dark)
    }
}

struct Inner {
    theme_mode: Cell<ThemeMode>,
    system_appearance: Cell<SystemAppearance>,
    /// Set once the user picks a mode; a later startup read is then stale
    mode_chosen: Cell<bool>,
    listeners: ListenerSet<ThemeState>,
    status_bar: Rc<dyn StatusBarControl>,
    pending_load: RefCell<Option<PendingOp<Option<String>>>>,
    pending_writes: RefCell<Vec<PendingOp<()>>>,
    appearance_subscription: RefCell<Option<Subscription>>,
    storage: Rc<AsyncStorage>,
}

impl Inner {
    fn snapshot(&self) -> ThemeState {
        ThemeState::resolve(self.theme_mode.get(), self.system_appearance.get())
    }

    /// Notifies listeners and the status bar about the move from `before`
    /// to the current state.
    fn publish(&self, before: ThemeState, force_status_bar: bool) {
        let after = self.snapshot();

        // Status bar first: a listener may change the mode again
        if force_status_bar || after.is_dark != before.is_dark {
            self.status_bar.set_style(after.status_bar_style());
        }

        // A listener that writes the store publishes the newer state itself
        if after != before {
            self.listeners.notify_while(&after, || self.snapshot() == after);
        }
    }

    fn apply_appearance(&self, appearance: SystemAppearance) {
        let before = self.snapshot();
        self.system_appearance.set(appearance);
        debug!(appearance = ?appearance, mode = %before.theme_mode, "system appearance applied");
        self.publish(before, false);
    }

    fn apply_loaded(&self, result: Result<Option<String>>) {
        match result {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) if self.mode_chosen.get() => {
                    debug!(stored = %mode, "stored theme mode superseded by user choice");
                }
                Ok(mode) => {
                    info!(mode = %mode, "restored theme mode");
                    let before = self.snapshot();
                    self.theme_mode.set(mode);
                    self.publish(before, false);
                }
                Err(e) => debug!(error = %e, "ignoring stored theme mode"),
            },
            Ok(None) => debug!("no stored theme mode"),
            Err(e) => warn!(error = %e, "Failed to load theme preference"),
        }
    }
}

fn log_write_outcome(key: &str, result: Result<()>) {
    match result {
        Ok(()) => debug!(key = %key, "preference saved"),
        Err(e) => warn!(key = %key, error = %e, "Failed to save theme preference"),
    }
}

/// Shared handle to the theme preference state
#[derive(Clone)]
pub struct ThemePreferenceStore {
    inner: Rc<Inner>,
}

impl ThemePreferenceStore {
    /// Creates the store and runs the startup protocol.
    ///
    /// Returns immediately; the stored mode is applied by a later
    /// [`poll`](Self::poll) or [`wait_for_pending`](Self::wait_for_pending).
    pub fn start(
        storage: Rc<AsyncStorage>,
        appearance: &dyn AppearanceSource,
        status_bar: Rc<dyn StatusBarControl>,
    ) -> Self {
        let inner = Rc::new(Inner {
            theme_mode: Cell::new(ThemeMode::System),
            system_appearance: Cell::new(appearance.current_appearance()),
            mode_chosen: Cell::new(false),
            listeners: ListenerSet::new(),
            status_bar,
            pending_load: RefCell::new(None),
            pending_writes: RefCell::new(Vec::new()),
            appearance_subscription: RefCell::new(None),
            storage,
        });

        let weak = Rc::downgrade(&inner);
        let subscription = appearance.subscribe(Box::new(move |appearance| {
            if let Some(inner) = weak.upgrade() {
                inner.apply_appearance(appearance);
            }
        }));
        *inner.appearance_subscription.borrow_mut() = Some(subscription);

        let initial = inner.snapshot();
        inner.status_bar.set_style(initial.status_bar_style());
        info!(
            appearance = ?initial.system_appearance,
            is_dark = initial.is_dark,
            "theme store started"
        );

        let load = inner.storage.get(THEME_STORAGE_KEY);
        *inner.pending_load.borrow_mut() = Some(load);

        Self { inner }
    }

    /// Current resolved snapshot
    pub fn state(&self) -> ThemeState {
        self.inner.snapshot()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.inner.theme_mode.get()
    }

    pub fn palette(&self) -> &'static ThemeColors {
        self.state().palette
    }

    pub fn is_dark(&self) -> bool {
        self.state().is_dark
    }

    /// Switches the user's preference.
    ///
    /// The in-memory mode changes before this returns, and the write of
    /// the new value is queued afterwards. The caller never waits for the
    /// write; a failed write is logged by [`poll`](Self::poll) and never
    /// rolls the mode back.
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        let inner = &self.inner;
        let before = inner.snapshot();

        inner.mode_chosen.set(true);
        inner.theme_mode.set(mode);
        info!(from = %before.theme_mode, to = %mode, "theme mode set");

        let write = inner.storage.set(THEME_STORAGE_KEY, mode.as_str());
        inner.pending_writes.borrow_mut().push(write);

        inner.publish(before, true);
    }

    /// Registers `listener` for every change of the resolved snapshot.
    ///
    /// Listeners run synchronously inside the call that caused the change
    /// and may read or write the store.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ThemeState) + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    /// True while the startup read has not been applied
    pub fn is_loading(&self) -> bool {
        self.inner.pending_load.borrow().is_some()
    }

    /// Number of issued writes whose outcome has not been collected
    pub fn pending_writes(&self) -> usize {
        self.inner.pending_writes.borrow().len()
    }

    /// Applies any storage results that have arrived. Never blocks.
    ///
    /// Called once per frame by the GUI.
    pub fn poll(&self) {
        let loaded = {
            let mut slot = self.inner.pending_load.borrow_mut();
            let result = slot.as_mut().and_then(|op| op.try_complete());
            if result.is_some() {
                *slot = None;
            }
            result
        };
        if let Some(result) = loaded {
            self.inner.apply_loaded(result);
        }

        let finished = {
            let mut writes = self.inner.pending_writes.borrow_mut();
            let mut finished = Vec::new();
            writes.retain_mut(|op| match op.try_complete() {
                Some(result) => {
                    finished.push((op.key().to_string(), result));
                    false
                }
                None => true,
            });
            finished
        };
        for (key, result) in finished {
            log_write_outcome(&key, result);
        }
    }

    /// Blocks until the startup read and every issued write have finished,
    /// then applies their results.
    pub fn wait_for_pending(&self) {
        let load = self.inner.pending_load.borrow_mut().take();
        if let Some(op) = load {
            self.inner.apply_loaded(op.wait());
        }

        let writes: Vec<PendingOp<()>> = self.inner.pending_writes.borrow_mut().drain(..).collect();
        for op in writes {
            let key = op.key().to_string();
            log_write_outcome(&key, op.wait());
        }
    }
}

impl fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("state", &self.state())
            .field("listeners", &self.inner.listeners.len())
            .field("loading", &self.is_loading())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::AppearanceMonitor;
    use crate::io::MemoryStore;
    use crate::status_bar::StatusBarHandle;
    use std::sync::Arc;

    fn start_with(entries: &[(&str, &str)], appearance: SystemAppearance) -> (ThemePreferenceStore, AppearanceMonitor) {
        let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
        let storage = Rc::new(AsyncStorage::new(store).unwrap());
        let monitor = AppearanceMonitor::new(appearance);
        let theme = ThemePreferenceStore::start(storage, &monitor, Rc::new(StatusBarHandle::default()));
        (theme, monitor)
    }

    #[test]
    fn starts_in_system_mode_before_load() {
        let (store, _monitor) = start_with(&[("theme_mode", "dark")], SystemAppearance::Light);
        assert_eq!(store.theme_mode(), ThemeMode::System);
        assert!(store.is_loading());

        store.wait_for_pending();
        assert!(!store.is_loading());
        assert_eq!(store.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn user_choice_beats_late_startup_read() {
        let (store, _monitor) = start_with(&[("theme_mode", "dark")], SystemAppearance::Light);
        store.set_theme_mode(ThemeMode::Light);
        store.wait_for_pending();
        assert_eq!(store.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn listeners_only_hear_real_changes() {
        let (store, monitor) = start_with(&[], SystemAppearance::Light);
        store.wait_for_pending();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription =
            store.subscribe(move |state| sink.borrow_mut().push((state.theme_mode, state.is_dark)));

        // Already System; nothing resolves differently
        store.set_theme_mode(ThemeMode::System);
        monitor.publish(SystemAppearance::Dark);
        store.set_theme_mode(ThemeMode::Light);
        // Explicit mode keeps the palette; only the observed appearance moves
        monitor.publish(SystemAppearance::Light);

        assert_eq!(
            *seen.borrow(),
            vec![
                (ThemeMode::System, true),
                (ThemeMode::Light, false),
                (ThemeMode::Light, false),
            ]
        );
    }

    #[test]
    fn listener_can_read_and_write_reentrantly() {
        let (store, _monitor) = start_with(&[], SystemAppearance::Light);
        let handle = store.clone();
        let _subscription = store.subscribe(move |state| {
            if state.theme_mode == ThemeMode::Dark {
                assert!(handle.state().is_dark);
                handle.set_theme_mode(ThemeMode::Light);
            }
        });

        store.set_theme_mode(ThemeMode::Dark);
        assert_eq!(store.theme_mode(), ThemeMode::Light);
        store.wait_for_pending();
    }

    #[test]
    fn later_listeners_never_see_superseded_state() {
        let (store, _monitor) = start_with(&[], SystemAppearance::Light);
        store.wait_for_pending();

        let handle = store.clone();
        let _revert = store.subscribe(move |state| {
            if state.theme_mode == ThemeMode::Dark {
                handle.set_theme_mode(ThemeMode::Light);
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _record = store.subscribe(move |state| sink.borrow_mut().push(state.theme_mode));

        store.set_theme_mode(ThemeMode::Dark);

        assert_eq!(store.theme_mode(), ThemeMode::Light);
        assert_eq!(*seen.borrow(), vec![ThemeMode::Light]);
        store.wait_for_pending();
    }

    #[test]
    fn dropping_store_releases_appearance_subscription() {
        let (store, monitor) = start_with(&[], SystemAppearance::Light);
        assert_eq!(monitor.subscriber_count(), 1);
        let clone = store.clone();
        drop(store);
        assert_eq!(monitor.subscriber_count(), 1);
        drop(clone);
        assert_eq!(monitor.subscriber_count(), 0);
    }

    #[test]
    fn poll_collects_finished_writes() {
        let (store, _monitor) = start_with(&[], SystemAppearance::Light);
        store.set_theme_mode(ThemeMode::Dark);
        assert_eq!(store.pending_writes(), 1);

        while store.pending_writes() > 0 || store.is_loading() {
            store.poll();
            std::thread::yield_now();
        }
        assert_eq!(store.theme_mode(), ThemeMode::Dark);
    }
}
