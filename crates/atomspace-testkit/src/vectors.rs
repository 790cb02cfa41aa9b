//! Golden ranking vectors.
//!
//! Each vector is a weighted input and the ranks every implementation of
//! the tie-averaged ranking must produce for it. Vectors are kept as JSON so
//! they can be shared with other implementations verbatim.

use std::collections::BTreeMap;

use atomspace_core::ranking;
use serde::{Deserialize, Serialize};

/// A single golden ranking vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingVector {
    pub name: String,
    pub description: String,
    /// Ordered `(key, weight)` input.
    pub input: Vec<(String, f64)>,
    /// Expected rank per key.
    pub expected: BTreeMap<String, f64>,
}

const VECTORS_JSON: &str = r#"[
  {
    "name": "three_way_tie",
    "description": "three equal weights share the mean of span 1..3",
    "input": [["a", 1.0], ["b", 1.0], ["c", 1.0]],
    "expected": {"a": 2.0, "b": 2.0, "c": 2.0}
  },
  {
    "name": "two_way_tie",
    "description": "two equal weights share the mean of span 1..2",
    "input": [["a", 1.0], ["b", 1.0]],
    "expected": {"a": 1.5, "b": 1.5}
  },
  {
    "name": "unequal_weights",
    "description": "a weight of two covers positions 2 and 3",
    "input": [["a", 1.0], ["b", 2.0]],
    "expected": {"a": 1.0, "b": 2.5}
  },
  {
    "name": "single_entry",
    "description": "a lone unit entry ranks first",
    "input": [["only", 1.0]],
    "expected": {"only": 1.0}
  },
  {
    "name": "mixed_groups",
    "description": "groups split where the weight changes",
    "input": [["a", 2.0], ["b", 2.0], ["c", 1.0], ["d", 3.0]],
    "expected": {"a": 2.5, "b": 2.5, "c": 5.0, "d": 7.0}
  },
  {
    "name": "empty",
    "description": "no input, no ranks",
    "input": [],
    "expected": {}
  }
]"#;

/// Load every golden vector.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed.
pub fn all_vectors() -> Vec<RankingVector> {
    serde_json::from_str(VECTORS_JSON).expect("embedded ranking vectors are valid JSON")
}

/// Whether `ranking` reproduces the vector's expected output.
pub fn verify_vector(vector: &RankingVector) -> bool {
    ranking(vector.input.iter().cloned()) == vector.expected
}

/// Verify every vector; returns the names of the ones that fail.
pub fn verify_all_vectors() -> Vec<String> {
    all_vectors()
        .into_iter()
        .filter(|v| !verify_vector(v))
        .map(|v| v.name)
        .collect()
}
