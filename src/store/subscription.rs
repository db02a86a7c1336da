//! Ordered subscriber list with removal that is safe mid-notification.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Unique id of a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn() + Send + Sync>;

struct Entry {
    id: SubscriptionId,
    /// Cleared on unsubscribe so an in-flight pass skips the entry.
    active: AtomicBool,
    callback: Callback,
}

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    entries: Mutex<Vec<Arc<Entry>>>,
}

impl Subscribers {
    pub(crate) fn add(&self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().push(Arc::new(Entry {
            id,
            active: AtomicBool::new(true),
            callback,
        }));
        id
    }

    /// Returns `false` if the id was already removed.
    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.lock();
        let Some(pos) = entries.iter().position(|e| e.id == id) else {
            return false;
        };
        let entry = entries.remove(pos);
        entry.active.store(false, Ordering::SeqCst);
        true
    }

    /// Invoke every active subscriber in registration order.
    ///
    /// Works on a snapshot so callbacks may subscribe or unsubscribe freely;
    /// subscribers added during the pass are first called on the next one.
    pub(crate) fn notify(&self) -> usize {
        let snapshot: Vec<Arc<Entry>> = self.entries.lock().clone();
        let mut called = 0;
        for entry in snapshot {
            if entry.active.load(Ordering::SeqCst) {
                (entry.callback)();
                called += 1;
            }
        }
        called
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// Handle returned by `Store::subscribe`.
///
/// Dropping the handle keeps the subscription alive; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: SubscriptionId,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, subscribers: Weak<Subscribers>) -> Self {
        Self { id, subscribers }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the callback. Idempotent; returns whether this call removed it.
    pub fn unsubscribe(&self) -> bool {
        self.subscribers
            .upgrade()
            .is_some_and(|subs| subs.remove(self.id))
    }
}
