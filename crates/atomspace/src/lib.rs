//! # AtomSpace
//!
//! Views over a shared, in-memory hypergraph of typed atoms.
//!
//! ## Overview
//!
//! An [`AtomSpace`] is a view onto an atom table. Several views can share
//! one table and read and write it concurrently:
//!
//! - **Ownership**: exactly one view owns the table and releases it on drop;
//!   the rest fail cleanly with [`SpaceError::TableReleased`] afterwards
//! - **Addition feed**: every view gets a private, bounded queue of the
//!   handles added to the table by anyone
//! - **Unique names**: [`AtomSpace::add_prefixed_node`] mints nodes with a
//!   random suffix that is unused for their type
//!
//! ## Usage
//!
//! ```rust
//! use atomspace::{AtomSpace, AtomType, TruthValue};
//!
//! let owner: AtomSpace = AtomSpace::new();
//! let view = owner.shared();
//!
//! let h = view
//!     .add_prefixed_node(AtomType::ConceptNode, "tmp-", TruthValue::DEFAULT)
//!     .unwrap();
//!
//! // The owner saw the addition made through the other view
//! assert_eq!(owner.drain(), vec![h]);
//! ```
//!
//! ## Re-exports
//!
//! - `atomspace::core` - Core primitives (Handle, AtomType, TruthValue, ranking)
//! - `atomspace::store` - Atom table trait and in-memory table

pub mod error;
pub mod names;
pub mod notify;
pub mod space;

// Re-export component crates
pub use atomspace_core as core;
pub use atomspace_store as store;

pub use error::{Result, SpaceError};
pub use notify::{NotificationQueue, Subscription};
pub use space::{AtomSpace, SpaceConfig};

// Re-export commonly used core types
pub use atomspace_core::{ranking, Atom, AtomKind, AtomType, Handle, TruthValue};
pub use atomspace_store::{AtomTable, MemoryAtomTable, SubscriptionId};
