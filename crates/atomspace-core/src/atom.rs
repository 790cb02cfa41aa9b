//! Atoms: the nodes and links stored in an atom table.

use serde::{Deserialize, Serialize};

use crate::truth::TruthValue;
use crate::types::{AtomType, Handle};

/// Payload distinguishing nodes from links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AtomKind {
    /// A named node.
    Node { name: String },
    /// A link over an ordered outgoing set.
    Link { outgoing: Vec<Handle> },
}

/// An atom as held by the table.
///
/// Tables own their atoms; callers only ever receive clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub handle: Handle,
    pub atom_type: AtomType,
    pub kind: AtomKind,
    pub tv: TruthValue,
}

impl Atom {
    /// Node name, if this atom is a node.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            AtomKind::Node { name } => Some(name),
            AtomKind::Link { .. } => None,
        }
    }

    /// Outgoing set, empty for nodes.
    pub fn outgoing(&self) -> &[Handle] {
        match &self.kind {
            AtomKind::Node { .. } => &[],
            AtomKind::Link { outgoing } => outgoing,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self.kind, AtomKind::Node { .. })
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, AtomKind::Link { .. })
    }
}
