//! The AtomSpace: a view over a shared atom table.
//!
//! Many views can look at one table. Exactly one of them, the owning view,
//! holds the table alive; every view (owner included) reaches it through a
//! weak reference. When the owner is dropped the table goes with it, and any
//! non-owning view still around reports [`SpaceError::TableReleased`]
//! instead of touching freed memory.

use std::sync::{Arc, Weak};

use rand::Rng;

use atomspace_core::{Atom, AtomType, Handle, TruthValue};
use atomspace_store::{AtomTable, MemoryAtomTable, SubscriptionId};

use crate::error::{Result, SpaceError};
use crate::names::{self, DEFAULT_MAX_ATTEMPTS};
use crate::notify::{NotificationQueue, Subscription, QUEUE_CAPACITY};

/// Configuration for an AtomSpace view.
///
/// Values are brought into range when a view is built; [`AtomSpace::config`]
/// reports what the view actually uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceConfig {
    /// Maximum number of buffered addition notifications, at most
    /// [`QUEUE_CAPACITY`].
    pub queue_capacity: usize,
    /// Candidates tried by `add_prefixed_node` before giving up, at least 1.
    pub max_name_attempts: u32,
}

impl SpaceConfig {
    fn clamped(self) -> Self {
        Self {
            queue_capacity: self.queue_capacity.min(QUEUE_CAPACITY),
            max_name_attempts: self.max_name_attempts.max(1),
        }
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            queue_capacity: QUEUE_CAPACITY,
            max_name_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A view over an atom table.
///
/// Provides:
/// - Atom creation and lookup against the shared table
/// - Unique-name node creation
/// - A private, bounded feed of every atom added to the table by anyone
///
/// Views are not `Clone`; use [`AtomSpace::shared`] to get another view of
/// the same table.
pub struct AtomSpace<T: AtomTable = MemoryAtomTable> {
    /// Strong reference, present only on the owning view.
    owned: Option<Arc<T>>,
    /// Access path for every operation.
    table: Weak<T>,
    /// Buffered additions for this view.
    feed: Arc<NotificationQueue>,
    /// Connection from the table's addition signal to `feed`.
    subscription: Subscription<T>,
    config: SpaceConfig,
}

impl<T: AtomTable + Default> AtomSpace<T> {
    /// Create an owning view over a fresh table.
    pub fn new() -> Self {
        Self::with_config(SpaceConfig::default())
    }

    /// Create an owning view over a fresh table with the given config.
    pub fn with_config(config: SpaceConfig) -> Self {
        Self::with_table(T::default(), config)
    }
}

impl<T: AtomTable + Default> Default for AtomSpace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AtomTable> AtomSpace<T> {
    /// Create an owning view over an existing table.
    ///
    /// The view takes the table over; it is released when this view drops.
    pub fn with_table(table: T, config: SpaceConfig) -> Self {
        let table = Arc::new(table);
        let mut space = Self::attach(&table, config);
        space.owned = Some(table);
        tracing::debug!(subscription = ?space.subscription_id(), "owning atomspace created");
        space
    }

    /// Create a non-owning view over a caller-held table.
    ///
    /// The caller's `Arc` keeps the table alive; once it is gone this view
    /// reports `TableReleased`.
    pub fn wrap(table: &Arc<T>) -> Self {
        Self::wrap_with_config(table, SpaceConfig::default())
    }

    /// Create a non-owning view over a caller-held table with the given config.
    pub fn wrap_with_config(table: &Arc<T>, config: SpaceConfig) -> Self {
        let space = Self::attach(table, config);
        tracing::debug!(subscription = ?space.subscription_id(), "wrapping atomspace created");
        space
    }

    /// Create a non-owning view of this view's table.
    ///
    /// The new view has its own empty feed and inherits this view's config.
    /// It must not be relied on past the owning view's lifetime; if it is,
    /// every operation fails with `TableReleased`.
    pub fn shared(&self) -> Self {
        let config = self.config.clone();
        match self.table.upgrade() {
            Some(table) => {
                let space = Self::attach(&table, config);
                tracing::debug!(subscription = ?space.subscription_id(), "shared atomspace created");
                space
            }
            None => {
                tracing::warn!("sharing an atomspace whose table was already released");
                Self {
                    owned: None,
                    table: self.table.clone(),
                    feed: Arc::new(NotificationQueue::new(config.queue_capacity)),
                    subscription: Subscription::inert(self.table.clone()),
                    config,
                }
            }
        }
    }

    fn attach(table: &Arc<T>, config: SpaceConfig) -> Self {
        let config = config.clamped();
        let feed = Arc::new(NotificationQueue::new(config.queue_capacity));
        let subscription = Subscription::connect(table, Arc::clone(&feed));
        Self {
            owned: None,
            table: Arc::downgrade(table),
            feed,
            subscription,
            config,
        }
    }

    /// Reassigning a view to another table is not supported.
    ///
    /// Always fails; `self` is left exactly as it was.
    pub fn rebind(&mut self, _other: &AtomSpace<T>) -> Result<()> {
        Err(SpaceError::Unsupported(
            "an AtomSpace cannot be rebound to another table",
        ))
    }

    /// Whether this view is responsible for releasing the table.
    pub fn owns_table(&self) -> bool {
        self.owned.is_some()
    }

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// The subscription token feeding this view, while connected.
    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.id()
    }

    /// Run `f` against the table, if it is still alive.
    ///
    /// The table is only borrowed for the duration of `f`; no view other
    /// than the owner can keep it alive.
    pub fn inspect_table<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R> {
        Ok(f(&*self.table()?))
    }

    fn table(&self) -> Result<Arc<T>> {
        self.table.upgrade().ok_or_else(|| {
            tracing::warn!("atomspace used after its table was released");
            SpaceError::TableReleased
        })
    }

    /// Whether two views look at the same table.
    pub fn same_table(&self, other: &AtomSpace<T>) -> bool {
        Weak::ptr_eq(&self.table, &other.table)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Atom Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a node, or get the existing one with the same type and name.
    pub fn add_node(&self, atom_type: AtomType, name: &str, tv: TruthValue) -> Result<Handle> {
        Ok(self.table()?.add_node(atom_type, name, tv)?)
    }

    /// Add a link, or get the existing one with the same type and outgoing set.
    pub fn add_link(
        &self,
        atom_type: AtomType,
        outgoing: &[Handle],
        tv: TruthValue,
    ) -> Result<Handle> {
        Ok(self.table()?.add_link(atom_type, outgoing, tv)?)
    }

    /// Add a node named `prefix` plus a random suffix unused for `atom_type`.
    ///
    /// Uses the thread-local generator. Fails with `NameSpaceExhausted`
    /// after `max_name_attempts` collisions.
    pub fn add_prefixed_node(
        &self,
        atom_type: AtomType,
        prefix: &str,
        tv: TruthValue,
    ) -> Result<Handle> {
        self.add_prefixed_node_with_rng(atom_type, prefix, tv, &mut rand::thread_rng())
    }

    /// Like [`add_prefixed_node`](Self::add_prefixed_node), drawing from `rng`.
    pub fn add_prefixed_node_with_rng<R: Rng + ?Sized>(
        &self,
        atom_type: AtomType,
        prefix: &str,
        tv: TruthValue,
        rng: &mut R,
    ) -> Result<Handle> {
        let table = self.table()?;
        names::add_prefixed_node(
            &*table,
            atom_type,
            prefix,
            tv,
            rng,
            self.config.max_name_attempts,
        )
    }

    /// Look up a node by type and name.
    pub fn get_handle(&self, atom_type: AtomType, name: &str) -> Result<Option<Handle>> {
        Ok(self.table()?.get_handle(atom_type, name)?)
    }

    pub fn is_valid_handle(&self, handle: Handle) -> Result<bool> {
        Ok(self.table()?.is_valid_handle(handle)?)
    }

    pub fn get_atom(&self, handle: Handle) -> Result<Option<Atom>> {
        Ok(self.table()?.get_atom(handle)?)
    }

    pub fn set_tv(&self, handle: Handle, tv: TruthValue) -> Result<()> {
        Ok(self.table()?.set_tv(handle, tv)?)
    }

    /// Remove an atom; `false` while links still point at it.
    pub fn remove_atom(&self, handle: Handle) -> Result<bool> {
        Ok(self.table()?.remove_atom(handle)?)
    }

    pub fn incoming(&self, handle: Handle) -> Result<Vec<Handle>> {
        Ok(self.table()?.incoming(handle)?)
    }

    /// Number of atoms in the table.
    pub fn size(&self) -> Result<usize> {
        Ok(self.table()?.size()?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Addition Feed
    // ─────────────────────────────────────────────────────────────────────────

    /// Take every buffered addition, oldest first.
    ///
    /// Best-effort: additions that arrived while the feed was full are not
    /// here (see [`dropped_notifications`](Self::dropped_notifications)).
    pub fn drain(&self) -> Vec<Handle> {
        self.feed.drain()
    }

    /// Number of buffered additions.
    pub fn pending(&self) -> usize {
        self.feed.len()
    }

    /// Additions discarded because the feed was full.
    pub fn dropped_notifications(&self) -> u64 {
        self.feed.dropped()
    }
}

impl<T: AtomTable> Drop for AtomSpace<T> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
        if self.owned.take().is_some() {
            tracing::debug!("owning atomspace dropped, releasing table");
        }
    }
}

impl<T: AtomTable> std::fmt::Debug for AtomSpace<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomSpace")
            .field("owns_table", &self.owns_table())
            .field("subscription", &self.subscription_id())
            .field("pending", &self.pending())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(space: &AtomSpace, name: &str) -> Handle {
        space
            .add_node(AtomType::ConceptNode, name, TruthValue::DEFAULT)
            .unwrap()
    }

    fn subscribers(space: &AtomSpace) -> usize {
        space.inspect_table(MemoryAtomTable::subscriber_count).unwrap()
    }

    #[test]
    fn test_ownership_flags() {
        let owner: AtomSpace = AtomSpace::new();
        let shared = owner.shared();
        let table = Arc::new(MemoryAtomTable::new());
        let wrapped = AtomSpace::wrap(&table);
        let rewrapped = wrapped.shared();

        assert!(owner.owns_table());
        assert!(!shared.owns_table());
        assert!(!wrapped.owns_table());
        assert!(owner.same_table(&shared));
        assert!(wrapped.same_table(&rewrapped));
        assert!(!owner.same_table(&wrapped));
    }

    #[test]
    fn test_each_view_has_one_subscription() {
        let owner: AtomSpace = AtomSpace::new();
        let shared = owner.shared();
        assert_eq!(subscribers(&owner), 2);
        assert_ne!(owner.subscription_id(), shared.subscription_id());

        drop(shared);
        assert_eq!(subscribers(&owner), 1);
    }

    #[test]
    fn test_addition_reaches_every_view() {
        let owner: AtomSpace = AtomSpace::new();
        let a = owner.shared();
        let b = owner.shared();

        let x = concept(&a, "x");
        let y = concept(&b, "y");

        assert_eq!(owner.drain(), vec![x, y]);
        assert_eq!(a.drain(), vec![x, y]);
        assert_eq!(b.drain(), vec![x, y]);
        assert!(owner.drain().is_empty());
    }

    #[test]
    fn test_shared_view_stale_after_owner_drops() {
        let owner: AtomSpace = AtomSpace::new();
        let shared = owner.shared();
        concept(&shared, "x");
        drop(owner);

        assert!(matches!(shared.size(), Err(SpaceError::TableReleased)));
        assert!(matches!(
            shared.add_prefixed_node(AtomType::ConceptNode, "p", TruthValue::DEFAULT),
            Err(SpaceError::TableReleased)
        ));

        // Sharing a stale view still constructs, but stays stale
        let late = shared.shared();
        assert!(late.subscription_id().is_none());
        assert!(matches!(late.size(), Err(SpaceError::TableReleased)));
    }

    #[test]
    fn test_inspected_table_does_not_outlive_owner() {
        let owner: AtomSpace = AtomSpace::new();
        let shared = owner.shared();
        concept(&shared, "x");
        assert_eq!(shared.inspect_table(|t| t.size().unwrap()).unwrap(), 1);
        assert_eq!(subscribers(&shared), 2);

        drop(owner);
        assert!(matches!(shared.size(), Err(SpaceError::TableReleased)));
        assert!(matches!(
            shared.inspect_table(|t| t.size()),
            Err(SpaceError::TableReleased)
        ));
    }

    #[test]
    fn test_wrapped_table_survives_view() {
        let table = Arc::new(MemoryAtomTable::new());
        let view = AtomSpace::wrap(&table);
        let h = concept(&view, "kept");
        drop(view);

        assert!(table.is_valid_handle(h).unwrap());
        assert_eq!(table.subscriber_count(), 0);
    }

    #[test]
    fn test_rebind_rejected_and_view_unchanged() {
        let mut left: AtomSpace = AtomSpace::new();
        let right: AtomSpace = AtomSpace::new();
        let before_sub = left.subscription_id();
        let before_owner = left.owns_table();
        concept(&left, "before");

        let err = left.rebind(&right).unwrap_err();
        assert!(matches!(err, SpaceError::Unsupported(_)));

        assert_eq!(left.subscription_id(), before_sub);
        assert_eq!(left.owns_table(), before_owner);
        assert!(!left.same_table(&right));
        assert_eq!(left.size().unwrap(), 1);
        assert_eq!(left.pending(), 1);
    }

    #[test]
    fn test_rebind_rejected_on_shared_view() {
        let owner: AtomSpace = AtomSpace::new();
        let mut shared = owner.shared();
        let other: AtomSpace = AtomSpace::new();
        let before_sub = shared.subscription_id();

        let err = shared.rebind(&other).unwrap_err();
        assert!(matches!(err, SpaceError::Unsupported(_)));

        assert!(!shared.owns_table());
        assert_eq!(shared.subscription_id(), before_sub);
        assert!(shared.same_table(&owner));
        let h = concept(&shared, "after");
        assert_eq!(owner.drain(), vec![h]);
        assert_eq!(other.size().unwrap(), 0);
    }

    #[test]
    fn test_config_inherited_by_shared_view() {
        let config = SpaceConfig {
            queue_capacity: 3,
            max_name_attempts: 4,
        };
        let owner: AtomSpace = AtomSpace::with_config(config.clone());
        let shared = owner.shared();
        assert_eq!(shared.config(), &config);

        for i in 0..5 {
            concept(&owner, &format!("n{i}"));
        }
        assert_eq!(shared.pending(), 3);
        assert_eq!(shared.dropped_notifications(), 2);

        let h = shared
            .add_prefixed_node(AtomType::ConceptNode, "s-", TruthValue::DEFAULT)
            .unwrap();
        let name = shared.get_atom(h).unwrap().unwrap().name().unwrap().to_string();
        assert_eq!(name.len(), 2 + names::SUFFIX_LEN);
    }

    #[test]
    fn test_config_is_clamped() {
        let owner: AtomSpace = AtomSpace::with_config(SpaceConfig {
            queue_capacity: 5000,
            max_name_attempts: 0,
        });
        assert_eq!(owner.config().queue_capacity, QUEUE_CAPACITY);
        assert_eq!(owner.config().max_name_attempts, 1);

        let writer = owner.shared();
        for i in 0..1500 {
            concept(&writer, &format!("n{i}"));
        }
        assert_eq!(owner.pending(), QUEUE_CAPACITY);
        assert_eq!(owner.dropped_notifications(), 500);

        // One attempt is still enough for a fresh name
        owner
            .add_prefixed_node(AtomType::ConceptNode, "c-", TruthValue::DEFAULT)
            .unwrap();
    }

    #[test]
    fn test_table_errors_pass_through() {
        let space: AtomSpace = AtomSpace::new();
        let err = space
            .add_link(AtomType::ListLink, &[Handle::new(404)], TruthValue::DEFAULT)
            .unwrap_err();
        assert!(matches!(
            err,
            SpaceError::Table(atomspace_store::TableError::InvalidHandle(h)) if h == Handle::new(404)
        ));
    }
}
