//! Proptest generators for property-based testing.

use proptest::prelude::*;

use atomspace_core::{AtomType, TruthValue};

/// Generate a node type.
pub fn node_type() -> impl Strategy<Value = AtomType> {
    prop::sample::select(
        AtomType::ALL
            .iter()
            .copied()
            .filter(AtomType::is_node)
            .collect::<Vec<_>>(),
    )
}

/// Generate a name prefix, possibly empty.
pub fn name_prefix() -> impl Strategy<Value = String> {
    "[a-z]{0,6}[-_]?".prop_map(String::from)
}

/// Generate a valid truth value.
pub fn truth_value() -> impl Strategy<Value = TruthValue> {
    (0.0f32..=1.0, 0.0f32..10_000.0).prop_map(|(strength, count)| {
        TruthValue::new(strength, count).expect("generated in range")
    })
}

/// Generate a weighted ranking input with distinct keys.
pub fn ranking_input() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(1u32..6, 0..30).prop_map(|weights| {
        weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| (format!("k{i:03}"), f64::from(w)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomspace::AtomSpace;
    use atomspace_core::ranking;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn test_prefixed_names_keep_prefix(
            atom_type in node_type(),
            prefix in name_prefix(),
            tv in truth_value(),
            seed in any::<u64>(),
        ) {
            let space: AtomSpace = AtomSpace::new();
            let mut rng = StdRng::seed_from_u64(seed);

            let h1 = space.add_prefixed_node_with_rng(atom_type, &prefix, tv, &mut rng).unwrap();
            let h2 = space.add_prefixed_node_with_rng(atom_type, &prefix, tv, &mut rng).unwrap();
            prop_assert_ne!(h1, h2);

            for h in [h1, h2] {
                let atom = space.get_atom(h).unwrap().unwrap();
                prop_assert_eq!(atom.atom_type, atom_type);
                prop_assert_eq!(atom.tv, tv);
                let name = atom.name().unwrap();
                prop_assert!(name.starts_with(prefix.as_str()));
                prop_assert_eq!(name.len(), prefix.len() + 16);
            }
        }

        #[test]
        fn test_feed_matches_additions(names in prop::collection::vec("[a-z]{1,8}", 0..60)) {
            let owner: AtomSpace = AtomSpace::new();
            let writer = owner.shared();

            // Duplicates are idempotent and must not be signalled twice
            let mut expected = Vec::new();
            let mut seen = HashSet::new();
            for name in &names {
                let h = writer
                    .add_node(AtomType::ConceptNode, name, TruthValue::DEFAULT)
                    .unwrap();
                if seen.insert(h) {
                    expected.push(h);
                }
            }

            prop_assert_eq!(owner.drain(), expected.clone());
            prop_assert_eq!(writer.drain(), expected);
        }

        #[test]
        fn test_ranking_weighted_sum(entries in ranking_input()) {
            let total: f64 = entries.iter().map(|(_, w)| w).sum();
            let ranks = ranking(entries.clone());

            let weighted: f64 = entries.iter().map(|(k, w)| ranks[k] * w).sum();
            prop_assert!((weighted - total * (total + 1.0) / 2.0).abs() < 1e-6);
        }
    }
}
