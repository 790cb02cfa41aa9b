//! Unique node naming.
//!
//! A prefixed node gets `prefix` followed by a random alphanumeric suffix.
//! Candidates that already name a node of the same type are discarded and
//! redrawn, up to a fixed number of attempts.

use rand::distributions::Alphanumeric;
use rand::Rng;

use atomspace_core::{AtomType, Handle, TruthValue};
use atomspace_store::AtomTable;

use crate::error::{Result, SpaceError};

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 16;

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 128;

/// Draw a suffix of `len` symbols from `[0-9A-Za-z]`.
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Add a node of `atom_type` whose name is `prefix` plus a fresh suffix.
///
/// Uniqueness is checked against `(atom_type, name)` at the moment of the
/// lookup; a concurrent writer racing the same name between lookup and
/// insert is not detected.
///
/// At least one candidate is always tried, so a `max_attempts` of zero
/// behaves like one.
pub fn add_prefixed_node<T, R>(
    table: &T,
    atom_type: AtomType,
    prefix: &str,
    tv: TruthValue,
    rng: &mut R,
    max_attempts: u32,
) -> Result<Handle>
where
    T: AtomTable + ?Sized,
    R: Rng + ?Sized,
{
    let max_attempts = max_attempts.max(1);
    let mut name = String::with_capacity(prefix.len() + SUFFIX_LEN);
    for attempt in 1..=max_attempts {
        name.clear();
        name.push_str(prefix);
        name.push_str(&random_suffix(rng, SUFFIX_LEN));

        if table.get_handle(atom_type, &name)?.is_none() {
            if attempt > 1 {
                tracing::debug!(prefix, attempt, "unused name found after collision");
            }
            return Ok(table.add_node(atom_type, &name, tv)?);
        }
    }

    tracing::warn!(prefix, attempts = max_attempts, "no unused name within retry bound");
    Err(SpaceError::NameSpaceExhausted {
        prefix: prefix.to_string(),
        attempts: max_attempts,
    })
}
