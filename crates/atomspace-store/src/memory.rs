//! In-memory implementation of the AtomTable trait.
//!
//! All atoms are lost when the table is dropped. Thread-safe via RwLock.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use atomspace_core::{Atom, AtomKind, AtomType, Handle, TruthValue};

use crate::error::{Result, TableError};
use crate::signal::AddSignal;
use crate::traits::{AddCallback, AtomTable, SubscriptionId};

/// In-memory atom table.
///
/// Additions fire the addition signal while the write lock is still held,
/// which serializes deliveries in table order.
pub struct MemoryAtomTable {
    inner: RwLock<MemoryTableInner>,
    additions: AddSignal,
}

struct MemoryTableInner {
    /// Atoms indexed by handle.
    atoms: HashMap<Handle, Atom>,

    /// Node index: (type, name) -> handle.
    nodes: HashMap<(AtomType, String), Handle>,

    /// Link index: (type, outgoing) -> handle.
    links: HashMap<(AtomType, Vec<Handle>), Handle>,

    /// Incoming sets: target -> links pointing at it.
    incoming: HashMap<Handle, BTreeSet<Handle>>,

    /// Next handle to hand out. Never decreases.
    next_handle: u64,
}

impl MemoryTableInner {
    fn allocate(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

impl MemoryAtomTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryTableInner {
                atoms: HashMap::new(),
                nodes: HashMap::new(),
                links: HashMap::new(),
                incoming: HashMap::new(),
                next_handle: 1,
            }),
            additions: AddSignal::new(),
        }
    }

    /// Number of live addition subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.additions.subscriber_count()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryTableInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryTableInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryAtomTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomTable for MemoryAtomTable {
    fn add_node(&self, atom_type: AtomType, name: &str, tv: TruthValue) -> Result<Handle> {
        if !atom_type.is_node() {
            return Err(TableError::TypeMismatch {
                atom_type,
                expected: "node",
            });
        }

        let mut inner = self.write();

        // Existing node: merge and return without signalling
        let existing = inner.nodes.get(&(atom_type, name.to_string())).copied();
        if let Some(handle) = existing {
            if let Some(atom) = inner.atoms.get_mut(&handle) {
                atom.tv = atom.tv.merge(&tv);
            }
            return Ok(handle);
        }

        let handle = inner.allocate();
        inner.atoms.insert(
            handle,
            Atom {
                handle,
                atom_type,
                kind: AtomKind::Node {
                    name: name.to_string(),
                },
                tv,
            },
        );
        inner.nodes.insert((atom_type, name.to_string()), handle);

        // Signal under the write lock so deliveries follow table order
        self.additions.emit(handle);
        Ok(handle)
    }

    fn add_link(
        &self,
        atom_type: AtomType,
        outgoing: &[Handle],
        tv: TruthValue,
    ) -> Result<Handle> {
        if !atom_type.is_link() {
            return Err(TableError::TypeMismatch {
                atom_type,
                expected: "link",
            });
        }

        let mut inner = self.write();

        if let Some(&missing) = outgoing.iter().find(|h| !inner.atoms.contains_key(*h)) {
            return Err(TableError::InvalidHandle(missing));
        }

        let key = (atom_type, outgoing.to_vec());
        let existing = inner.links.get(&key).copied();
        if let Some(handle) = existing {
            if let Some(atom) = inner.atoms.get_mut(&handle) {
                atom.tv = atom.tv.merge(&tv);
            }
            return Ok(handle);
        }

        let handle = inner.allocate();
        inner.atoms.insert(
            handle,
            Atom {
                handle,
                atom_type,
                kind: AtomKind::Link {
                    outgoing: outgoing.to_vec(),
                },
                tv,
            },
        );
        inner.links.insert(key, handle);
        for target in outgoing {
            inner.incoming.entry(*target).or_default().insert(handle);
        }

        self.additions.emit(handle);
        Ok(handle)
    }

    fn get_handle(&self, atom_type: AtomType, name: &str) -> Result<Option<Handle>> {
        let inner = self.read();
        Ok(inner.nodes.get(&(atom_type, name.to_string())).copied())
    }

    fn is_valid_handle(&self, handle: Handle) -> Result<bool> {
        let inner = self.read();
        Ok(inner.atoms.contains_key(&handle))
    }

    fn get_atom(&self, handle: Handle) -> Result<Option<Atom>> {
        let inner = self.read();
        Ok(inner.atoms.get(&handle).cloned())
    }

    fn set_tv(&self, handle: Handle, tv: TruthValue) -> Result<()> {
        let mut inner = self.write();
        let atom = inner
            .atoms
            .get_mut(&handle)
            .ok_or(TableError::InvalidHandle(handle))?;
        atom.tv = tv;
        Ok(())
    }

    fn remove_atom(&self, handle: Handle) -> Result<bool> {
        let mut inner = self.write();

        if !inner.atoms.contains_key(&handle) {
            return Err(TableError::InvalidHandle(handle));
        }
        let referenced = inner
            .incoming
            .get(&handle)
            .map(|links| !links.is_empty())
            .unwrap_or(false);
        if referenced {
            return Ok(false);
        }

        let Some(atom) = inner.atoms.remove(&handle) else {
            return Ok(false);
        };
        inner.incoming.remove(&handle);
        match atom.kind {
            AtomKind::Node { name } => {
                inner.nodes.remove(&(atom.atom_type, name));
            }
            AtomKind::Link { outgoing } => {
                for target in &outgoing {
                    if let Some(links) = inner.incoming.get_mut(target) {
                        links.remove(&handle);
                    }
                }
                inner.links.remove(&(atom.atom_type, outgoing));
            }
        }

        Ok(true)
    }

    fn incoming(&self, handle: Handle) -> Result<Vec<Handle>> {
        let inner = self.read();
        if !inner.atoms.contains_key(&handle) {
            return Err(TableError::InvalidHandle(handle));
        }
        Ok(inner
            .incoming
            .get(&handle)
            .map(|links| links.iter().copied().collect())
            .unwrap_or_default())
    }

    fn size(&self) -> Result<usize> {
        let inner = self.read();
        Ok(inner.atoms.len())
    }

    fn subscribe_additions(&self, callback: AddCallback) -> SubscriptionId {
        self.additions.subscribe(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.additions.unsubscribe(id)
    }
}
