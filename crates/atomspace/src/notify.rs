//! Per-view addition feeds.
//!
//! Every view owns a [`NotificationQueue`] and a [`Subscription`] that feeds
//! it from the table's addition signal. The queue is bounded and drops the
//! newest handle when full, so producers never block on a slow consumer.
//! The feed is best-effort: under sustained overflow handles are lost, and
//! consumers should treat it as a hint rather than a record.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use atomspace_core::Handle;
use atomspace_store::{AtomTable, SubscriptionId};

/// Capacity of a view's queue, and the most any queue may buffer.
pub const QUEUE_CAPACITY: usize = 1000;

/// Bounded FIFO of recently added handles.
///
/// Append and drain are serialized by a single mutex.
#[derive(Debug)]
pub struct NotificationQueue {
    handles: Mutex<VecDeque<Handle>>,
    capacity: usize,
    dropped: AtomicU64,
}

impl NotificationQueue {
    /// Create an empty queue holding at most `capacity` handles.
    ///
    /// `capacity` is clamped to [`QUEUE_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self {
            handles: Mutex::new(VecDeque::new()),
            capacity: capacity.min(QUEUE_CAPACITY),
            dropped: AtomicU64::new(0),
        }
    }

    /// Append a handle unless the queue is full.
    ///
    /// Returns `false` (and leaves the queue untouched) when the handle was
    /// dropped.
    pub fn push(&self, handle: Handle) -> bool {
        let mut handles = self.lock();
        if handles.len() >= self.capacity {
            drop(handles);
            let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::trace!(%handle, dropped, "notification queue full, dropping handle");
            return false;
        }
        handles.push_back(handle);
        true
    }

    /// Remove and return every buffered handle, oldest first.
    pub fn drain(&self) -> Vec<Handle> {
        self.lock().drain(..).collect()
    }

    /// Number of buffered handles.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Handles discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Handle>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A live connection from a table's addition signal to one queue.
///
/// Dropping the subscription disconnects it.
pub struct Subscription<T: AtomTable> {
    table: Weak<T>,
    id: Option<SubscriptionId>,
}

impl<T: AtomTable> Subscription<T> {
    /// Connect `queue` to every future addition on `table`.
    pub fn connect(table: &Arc<T>, queue: Arc<NotificationQueue>) -> Self {
        let id = table.subscribe_additions(Arc::new(move |handle: Handle| {
            queue.push(handle);
        }));
        Self {
            table: Arc::downgrade(table),
            id: Some(id),
        }
    }

    /// A subscription connected to nothing.
    pub(crate) fn inert(table: Weak<T>) -> Self {
        Self { table, id: None }
    }

    /// The signal-side token, while connected.
    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Disconnect. Idempotent.
    ///
    /// Once this returns, no delivery to the queue is in flight or will
    /// start. A table that is already gone took its callbacks with it.
    pub fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(table) = self.table.upgrade() {
                table.unsubscribe(id);
            }
        }
    }
}

impl<T: AtomTable> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
