//! # AtomSpace Testkit
//!
//! Testing utilities for the AtomSpace.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known ranking inputs with expected outputs
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A drop-counting table and multi-view setups
//!
//! ## Golden Vectors
//!
//! ```rust
//! use atomspace_testkit::vectors::{all_vectors, verify_vector};
//!
//! for vector in all_vectors() {
//!     assert!(verify_vector(&vector), "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use atomspace_testkit::generators::{name_prefix, node_type};
//!
//! proptest! {
//!     #[test]
//!     fn prefixed_names_keep_prefix(t in node_type(), prefix in name_prefix()) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use atomspace_testkit::fixtures::SpaceFixture;
//!
//! let fixture = SpaceFixture::with_views(2);
//! let h = fixture.concept(1, "cat");
//! assert_eq!(fixture.owner.drain(), vec![h]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{CountingTable, SpaceFixture};
pub use generators::{name_prefix, node_type, truth_value};
pub use vectors::{all_vectors, verify_all_vectors, RankingVector};
