use std::{
    cell::RefCell,
    panic::{self, AssertUnwindSafe},
    rc::{Rc, Weak},
};

use crate::model::ApplicationState;

type Callback = dyn FnMut(&ApplicationState);

struct Entry {
    id: u64,
    callback: Rc<RefCell<Box<Callback>>>,
}

/// Callbacks registered on a store, in registration order.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl SubscriberRegistry {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`crate::store::StateStore::subscribe`].
///
/// Dropping the handle keeps the callback registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<SubscriberRegistry>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Removes the callback. Returns `false` when it was already removed or the
    /// store is gone.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|entry| entry.id != self.id);
        before != registry.entries.len()
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.borrow().entries.iter().any(|entry| entry.id == self.id))
            .unwrap_or(false)
    }
}

pub(crate) fn register(
    registry: &Rc<RefCell<SubscriberRegistry>>,
    callback: Box<Callback>,
) -> Subscription {
    let mut inner = registry.borrow_mut();
    inner.next_id += 1;
    let id = inner.next_id;
    inner.entries.push(Entry {
        id,
        callback: Rc::new(RefCell::new(callback)),
    });
    Subscription {
        id,
        registry: Rc::downgrade(registry),
    }
}

/// Delivers `snapshot` to every callback registered when delivery starts.
///
/// A panicking callback is logged and skipped; the rest still run.
pub(crate) fn broadcast(registry: &Rc<RefCell<SubscriberRegistry>>, snapshot: &ApplicationState) {
    let targets: Vec<(u64, Rc<RefCell<Box<Callback>>>)> = registry
        .borrow()
        .entries
        .iter()
        .map(|entry| (entry.id, Rc::clone(&entry.callback)))
        .collect();

    for (id, callback) in targets {
        let Ok(mut callback) = callback.try_borrow_mut() else {
            tracing::warn!(subscriber = id, "subscriber is already running; skipping nested delivery");
            continue;
        };
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (&mut **callback)(snapshot)));
        if outcome.is_err() {
            tracing::error!(subscriber = id, "subscriber panicked during notification");
        }
    }
}
