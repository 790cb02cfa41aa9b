//! Truth values: the belief payload carried by every atom.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Simple truth value: a strength and the evidence count behind it.
///
/// Confidence is derived from the count as `count / (count + K)` with
/// `K = 800`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruthValue {
    strength: f32,
    count: f32,
}

impl TruthValue {
    /// Lookahead constant used to turn a count into a confidence.
    pub const DEFAULT_K: f32 = 800.0;

    /// The null truth value: no strength, no evidence.
    pub const DEFAULT: Self = Self {
        strength: 0.0,
        count: 0.0,
    };

    /// Create a truth value.
    ///
    /// Fails unless `strength` is in `[0, 1]` and `count` is a non-negative
    /// finite number.
    pub fn new(strength: f32, count: f32) -> Result<Self> {
        let strength_ok = (0.0..=1.0).contains(&strength);
        let count_ok = count.is_finite() && count >= 0.0;
        if !strength_ok || !count_ok {
            return Err(CoreError::InvalidTruthValue { strength, count });
        }
        Ok(Self { strength, count })
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn count(&self) -> f32 {
        self.count
    }

    /// Confidence derived from the evidence count.
    pub fn confidence(&self) -> f32 {
        self.count / (self.count + Self::DEFAULT_K)
    }

    /// Merge two truth values.
    ///
    /// The one with the higher confidence wins; on a tie `self` is kept.
    pub fn merge(&self, other: &TruthValue) -> TruthValue {
        if other.confidence() > self.confidence() {
            *other
        } else {
            *self
        }
    }
}

impl Default for TruthValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(stv {} {} conf={:.6})",
            self.strength,
            self.count,
            self.confidence()
        )
    }
}
