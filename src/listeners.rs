//! Single-threaded listener registry and subscription handles.
//!
//! Listeners are called synchronously, in registration order, on the thread
//! that publishes. The registry is cloned out before any listener runs, so a
//! listener may subscribe, unsubscribe, or publish again without tripping a
//! `RefCell` borrow.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Identifier for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;
type Entries<T> = RefCell<Vec<(ListenerId, Listener<T>)>>;

/// Ordered set of callbacks for values of type `T`
pub struct ListenerSet<T> {
    entries: Rc<Entries<T>>,
    next_id: Cell<u64>,
}

impl<T: 'static> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(1),
        }
    }

    /// Registers `listener` and returns the handle that removes it
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(listener)));
        debug!(listener_id = id.0, "listener registered");

        let entries: Weak<Entries<T>> = Rc::downgrade(&self.entries);
        Subscription::new(move || {
            if let Some(entries) = entries.upgrade() {
                entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
                debug!(listener_id = id.0, "listener removed");
            }
        })
    }

    /// Calls every registered listener with `value`
    pub fn notify(&self, value: &T) {
        self.notify_while(value, || true);
    }

    /// Calls registered listeners with `value` while `still_current` holds.
    ///
    /// `still_current` is checked before each listener; once it returns
    /// false the remaining listeners are skipped, because a listener has
    /// already published a newer value to everyone.
    pub fn notify_while<F>(&self, value: &T, still_current: F)
    where
        F: Fn() -> bool,
    {
        let listeners: Vec<Listener<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            if !still_current() {
                debug!("superseded value; skipping remaining listeners");
                return;
            }
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: 'static> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("listeners", &self.entries.borrow().len())
            .finish()
    }
}

/// Handle owning one registration.
///
/// The registration is released exactly once: either by
/// [`Subscription::unsubscribe`], which consumes the handle, or when the
/// handle is dropped.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the action that tears the registration down
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases the registration now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
