//! Test fixtures and helpers.
//!
//! Common setup code for multi-view tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use atomspace::{AtomSpace, SpaceConfig};
use atomspace_core::{Atom, AtomType, Handle, TruthValue};
use atomspace_store::{AddCallback, AtomTable, MemoryAtomTable, Result, SubscriptionId};

/// A memory table that records how often it has been dropped.
///
/// Lets tests check that a shared table is released exactly once.
pub struct CountingTable {
    inner: MemoryAtomTable,
    drops: Arc<AtomicUsize>,
}

impl CountingTable {
    /// Create a table and the counter its drops will bump.
    pub fn with_counter() -> (Self, Arc<AtomicUsize>) {
        let drops = Arc::new(AtomicUsize::new(0));
        let table = Self {
            inner: MemoryAtomTable::new(),
            drops: Arc::clone(&drops),
        };
        (table, drops)
    }

    /// Number of live addition subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl Drop for CountingTable {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl AtomTable for CountingTable {
    fn add_node(&self, atom_type: AtomType, name: &str, tv: TruthValue) -> Result<Handle> {
        self.inner.add_node(atom_type, name, tv)
    }

    fn add_link(&self, atom_type: AtomType, outgoing: &[Handle], tv: TruthValue) -> Result<Handle> {
        self.inner.add_link(atom_type, outgoing, tv)
    }

    fn get_handle(&self, atom_type: AtomType, name: &str) -> Result<Option<Handle>> {
        self.inner.get_handle(atom_type, name)
    }

    fn is_valid_handle(&self, handle: Handle) -> Result<bool> {
        self.inner.is_valid_handle(handle)
    }

    fn get_atom(&self, handle: Handle) -> Result<Option<Atom>> {
        self.inner.get_atom(handle)
    }

    fn set_tv(&self, handle: Handle, tv: TruthValue) -> Result<()> {
        self.inner.set_tv(handle, tv)
    }

    fn remove_atom(&self, handle: Handle) -> Result<bool> {
        self.inner.remove_atom(handle)
    }

    fn incoming(&self, handle: Handle) -> Result<Vec<Handle>> {
        self.inner.incoming(handle)
    }

    fn size(&self) -> Result<usize> {
        self.inner.size()
    }

    fn subscribe_additions(&self, callback: AddCallback) -> SubscriptionId {
        self.inner.subscribe_additions(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

/// An owning view plus a number of views sharing its table.
pub struct SpaceFixture {
    pub owner: AtomSpace,
    pub views: Vec<AtomSpace>,
}

impl SpaceFixture {
    /// Owner with default config and `count` shared views.
    pub fn with_views(count: usize) -> Self {
        Self::with_config(count, SpaceConfig::default())
    }

    /// Owner with `config` and `count` shared views.
    pub fn with_config(count: usize, config: SpaceConfig) -> Self {
        let owner = AtomSpace::with_config(config);
        let views = (0..count).map(|_| owner.shared()).collect();
        Self { owner, views }
    }

    /// Add a ConceptNode through shared view `view`.
    ///
    /// # Panics
    ///
    /// Panics if `view` is out of range or the add fails.
    pub fn concept(&self, view: usize, name: &str) -> Handle {
        self.views[view]
            .add_node(AtomType::ConceptNode, name, TruthValue::DEFAULT)
            .expect("fixture add_node")
    }

    /// Every view, owner first.
    pub fn all_views(&self) -> impl Iterator<Item = &AtomSpace> {
        std::iter::once(&self.owner).chain(self.views.iter())
    }
}
