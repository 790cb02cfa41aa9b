//! Addition signal: the subscriber registry fired on every atom addition.
//!
//! `emit` holds the registry's read lock for the whole fan-out and
//! `unsubscribe` takes the write lock, so a subscription that has been
//! removed can have no delivery in flight.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use atomspace_core::Handle;

use crate::traits::{AddCallback, SubscriptionId};

/// Registry of addition callbacks.
///
/// Callbacks are invoked in subscription order.
pub struct AddSignal {
    slots: RwLock<BTreeMap<SubscriptionId, AddCallback>>,
    next_id: AtomicU64,
}

impl AddSignal {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a callback.
    pub fn subscribe(&self, callback: AddCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, callback);
        tracing::trace!(subscription = id.0, "addition subscriber registered");
        id
    }

    /// Remove a callback. Idempotent; returns whether it was registered.
    ///
    /// Blocks until any `emit` in progress has finished.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self
            .slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some();
        if removed {
            tracing::trace!(subscription = id.0, "addition subscriber removed");
        }
        removed
    }

    /// Deliver `handle` to every subscriber.
    pub fn emit(&self, handle: Handle) {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        for callback in slots.values() {
            callback(handle);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for AddSignal {
    fn default() -> Self {
        Self::new()
    }
}
