//! Change notification for the recent people registry.
//!
//! Subscribers are plain closures. `subscribe` hands back a [`Subscription`]
//! guard; the callback stays registered exactly as long as the guard lives.
//! Each callback receives a shared view of the source alongside the change,
//! so it can read the new state while being notified.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

/// What changed in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A record was inserted or replaced
    Added(Uuid),
    /// The registry was reloaded from disk
    Reloaded,
    /// History was cleared
    Cleared,
}

type Callback<T> = Rc<dyn Fn(&T, &Change)>;

struct Slots<T: ?Sized> {
    next_id: u64,
    callbacks: Vec<(u64, Callback<T>)>,
}

/// Publish/subscribe list owned by the registry
pub struct ChangeSignal<T: ?Sized> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T: ?Sized + 'static> ChangeSignal<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                callbacks: Vec::new(),
            })),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T, &Change) + 'static,
    {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.callbacks.push((id, Rc::new(callback)));

        let weak = Rc::downgrade(&self.slots);
        Subscription {
            id,
            unsubscribe: Some(Box::new(move || {
                // Signal may already be gone
                if let Some(slots) = weak.upgrade() {
                    slots.borrow_mut().callbacks.retain(|(slot, _)| *slot != id);
                }
            })),
        }
    }

    /// Invoke every subscriber with `source` after it changed.
    ///
    /// Works from a snapshot, so callbacks may subscribe or drop their own
    /// subscription while being notified.
    pub fn emit(&self, source: &T, change: &Change) {
        let snapshot: Vec<Callback<T>> = self
            .slots
            .borrow()
            .callbacks
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        for callback in snapshot {
            callback(source, change);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().callbacks.len()
    }
}

impl<T: ?Sized + 'static> Default for ChangeSignal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> fmt::Debug for ChangeSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Scoped subscription; unsubscribes on drop
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
