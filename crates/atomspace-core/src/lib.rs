//! # AtomSpace Core
//!
//! Pure primitives for the AtomSpace: handles, atom types, truth values,
//! and the tie-averaged ranking transform.
//!
//! This crate contains no locking, no storage, no notification plumbing.
//! It is plain data plus a couple of pure functions.
//!
//! ## Key Types
//!
//! - [`Handle`] - Opaque, table-scoped identifier of one atom
//! - [`AtomType`] - Discriminator for node and link types
//! - [`TruthValue`] - Belief value attached to every atom
//! - [`Atom`] - A node or link as stored in an atom table
//!
//! ## Ranking
//!
//! [`ranking`] turns an ordered `(key, weight)` sequence into tie-averaged
//! ranks. See the [`ranking`](mod@ranking) module.

pub mod atom;
pub mod error;
pub mod ranking;
pub mod truth;
pub mod types;

pub use atom::{Atom, AtomKind};
pub use error::{CoreError, Result};
pub use ranking::ranking;
pub use truth::TruthValue;
pub use types::{AtomType, Handle};
