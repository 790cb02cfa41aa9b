//! Strong type definitions for the AtomSpace.
//!
//! Identifiers are newtypes so a handle can never be confused with a count
//! or an index at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A table-scoped atom identifier.
///
/// Handles are allocated by the atom table, monotonically from 1, and are
/// never reused while the table lives. `Handle::UNDEFINED` is the sentinel
/// for "no atom".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(u64);

impl Handle {
    /// The sentinel handle that never names an atom.
    pub const UNDEFINED: Self = Self(0);

    /// Create a handle from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Whether this is the undefined sentinel.
    pub const fn is_undefined(&self) -> bool {
        self.0 == Self::UNDEFINED.0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "Handle(UNDEFINED)")
        } else {
            write!(f, "Handle({})", self.0)
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

/// Atom type discriminator.
///
/// Node types carry a name; link types carry an outgoing set of handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AtomType {
    ConceptNode,
    PredicateNode,
    VariableNode,
    NumberNode,
    ListLink,
    InheritanceLink,
    EvaluationLink,
    AndLink,
    OrLink,
    NotLink,
}

impl AtomType {
    /// All known atom types.
    pub const ALL: [AtomType; 10] = [
        AtomType::ConceptNode,
        AtomType::PredicateNode,
        AtomType::VariableNode,
        AtomType::NumberNode,
        AtomType::ListLink,
        AtomType::InheritanceLink,
        AtomType::EvaluationLink,
        AtomType::AndLink,
        AtomType::OrLink,
        AtomType::NotLink,
    ];

    /// Whether atoms of this type are nodes.
    pub const fn is_node(&self) -> bool {
        matches!(
            self,
            AtomType::ConceptNode
                | AtomType::PredicateNode
                | AtomType::VariableNode
                | AtomType::NumberNode
        )
    }

    /// Whether atoms of this type are links.
    pub const fn is_link(&self) -> bool {
        !self.is_node()
    }

    /// Type name as written in atom dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            AtomType::ConceptNode => "ConceptNode",
            AtomType::PredicateNode => "PredicateNode",
            AtomType::VariableNode => "VariableNode",
            AtomType::NumberNode => "NumberNode",
            AtomType::ListLink => "ListLink",
            AtomType::InheritanceLink => "InheritanceLink",
            AtomType::EvaluationLink => "EvaluationLink",
            AtomType::AndLink => "AndLink",
            AtomType::OrLink => "OrLink",
            AtomType::NotLink => "NotLink",
        }
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_handle() {
        assert!(Handle::UNDEFINED.is_undefined());
        assert!(Handle::default().is_undefined());
        assert!(!Handle::new(1).is_undefined());
    }

    #[test]
    fn test_handle_debug() {
        assert_eq!(format!("{:?}", Handle::new(42)), "Handle(42)");
        assert_eq!(format!("{:?}", Handle::UNDEFINED), "Handle(UNDEFINED)");
    }

    #[test]
    fn test_node_link_partition() {
        let nodes = AtomType::ALL.iter().filter(|t| t.is_node()).count();
        let links = AtomType::ALL.iter().filter(|t| t.is_link()).count();
        assert_eq!(nodes, 4);
        assert_eq!(links, 6);
        assert!(AtomType::ConceptNode.is_node());
        assert!(AtomType::InheritanceLink.is_link());
    }

    #[test]
    fn test_atom_type_display() {
        assert_eq!(AtomType::ConceptNode.to_string(), "ConceptNode");
        assert_eq!(AtomType::NotLink.to_string(), "NotLink");
    }
}
