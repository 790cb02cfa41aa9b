//! AtomTable trait: the abstract interface for atom storage.
//!
//! This trait keeps the facade storage-agnostic. The in-memory table is the
//! shipped implementation.

use std::fmt;
use std::sync::Arc;

use atomspace_core::{Atom, AtomType, Handle, TruthValue};

use crate::error::Result;

/// Callback invoked with the handle of every newly added atom.
pub type AddCallback = Arc<dyn Fn(Handle) + Send + Sync>;

/// Token identifying one addition subscription.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

/// The AtomTable trait: synchronous interface for atom storage.
///
/// Every method runs to completion on the calling thread. Implementations
/// must be shareable across threads.
///
/// # Design Notes
///
/// - **Idempotent adds**: `add_node` / `add_link` on an existing atom return
///   its handle, merge the truth value, and do not signal.
/// - **No handle reuse**: A handle is never handed out twice.
/// - **Signal ordering**: Subscribers see additions in table order.
/// - **Callbacks**: Run on the adding thread and must not call back into
///   the same table.
pub trait AtomTable: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Atom Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a node, or return the existing one with the same type and name.
    ///
    /// Fails with `TypeMismatch` if `atom_type` is not a node type.
    fn add_node(&self, atom_type: AtomType, name: &str, tv: TruthValue) -> Result<Handle>;

    /// Add a link, or return the existing one with the same type and outgoing set.
    ///
    /// Fails with `TypeMismatch` for node types and `InvalidHandle` if any
    /// outgoing handle is not live.
    fn add_link(&self, atom_type: AtomType, outgoing: &[Handle], tv: TruthValue)
        -> Result<Handle>;

    /// Look up a node by type and name.
    fn get_handle(&self, atom_type: AtomType, name: &str) -> Result<Option<Handle>>;

    /// Whether the handle names a live atom.
    fn is_valid_handle(&self, handle: Handle) -> Result<bool>;

    /// Get a copy of an atom.
    fn get_atom(&self, handle: Handle) -> Result<Option<Atom>>;

    /// Replace an atom's truth value.
    fn set_tv(&self, handle: Handle, tv: TruthValue) -> Result<()>;

    /// Remove an atom.
    ///
    /// Returns `false` if the atom is still referenced by a link.
    fn remove_atom(&self, handle: Handle) -> Result<bool>;

    /// Links whose outgoing set contains `handle`.
    fn incoming(&self, handle: Handle) -> Result<Vec<Handle>>;

    /// Number of live atoms.
    fn size(&self) -> Result<usize>;

    // ─────────────────────────────────────────────────────────────────────────
    // Addition Signal
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a callback for every subsequent atom addition.
    fn subscribe_additions(&self, callback: AddCallback) -> SubscriptionId;

    /// Remove a subscription.
    ///
    /// Returns `false` if it was already removed. Once this returns, the
    /// callback is not running and will not run again.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
