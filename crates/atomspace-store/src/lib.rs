//! # AtomSpace Store
//!
//! Atom table abstraction for the AtomSpace. Provides a trait-based
//! interface for atom storage with an in-memory implementation, plus the
//! addition signal views subscribe to.
//!
//! ## Overview
//!
//! The facade layer talks to storage only through the [`AtomTable`] trait,
//! so it never cares how atoms are held. [`MemoryAtomTable`] is the
//! implementation shipped here.
//!
//! ## Key Types
//!
//! - [`AtomTable`] - The trait for all table operations
//! - [`MemoryAtomTable`] - Lock-guarded in-memory table
//! - [`AddSignal`] - Subscriber registry fired on every atom addition
//! - [`SubscriptionId`] - Token returned by a subscription
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use atomspace_core::{AtomType, Handle, TruthValue};
//! use atomspace_store::{AtomTable, MemoryAtomTable};
//!
//! let table = MemoryAtomTable::new();
//! let id = table.subscribe_additions(Arc::new(|h: Handle| println!("added {h}")));
//!
//! let cat = table
//!     .add_node(AtomType::ConceptNode, "cat", TruthValue::DEFAULT)
//!     .unwrap();
//! assert_eq!(table.get_handle(AtomType::ConceptNode, "cat").unwrap(), Some(cat));
//!
//! assert!(table.unsubscribe(id));
//! ```
//!
//! ## Design Notes
//!
//! - **Idempotent adds**: Adding an existing `(type, name)` node or
//!   `(type, outgoing)` link returns the existing handle and fires no signal
//! - **Ordered signals**: Additions are signalled in the order the table
//!   applied them
//! - **Quiescent unsubscribe**: Once `unsubscribe` returns, the callback is
//!   neither running nor going to run

pub mod error;
pub mod memory;
pub mod signal;
pub mod traits;

pub use error::{Result, TableError};
pub use memory::MemoryAtomTable;
pub use signal::AddSignal;
pub use traits::{AddCallback, AtomTable, SubscriptionId};
