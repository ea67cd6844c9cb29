//! Property-based tests for merging and fallback chains.

use proptest::prelude::*;
use tincture_theme::{build_chain, merge, FallbackValue, TokenSet};

// ============================================================================
// Strategies
// ============================================================================

fn token_set_strategy() -> impl Strategy<Value = TokenSet> {
    prop::collection::btree_map("[a-z]{1,3}", "#[0-9a-f]{6}", 0..8)
        .prop_map(|map| map.into_iter().collect())
}

fn fallback_strategy() -> impl Strategy<Value = FallbackValue> {
    ("[0-9]{1,3}(vh|dvh|svh|px)", prop::option::of("[a-z ]{1,12}"))
        .prop_map(|(value, note)| FallbackValue::new(value, note))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Merging no layers returns the base unchanged.
    #[test]
    fn empty_overrides_are_identity(base in token_set_strategy()) {
        let merged = merge(&base, std::iter::empty());
        prop_assert_eq!(merged, base);
    }

    /// For a role set by both layers, the second layer's value wins.
    #[test]
    fn last_layer_wins(
        base in token_set_strategy(),
        first in token_set_strategy(),
        second in token_set_strategy(),
    ) {
        let merged = merge(&base, [&first, &second]);
        for (role, value) in second.iter() {
            prop_assert_eq!(merged.get(role), Some(value));
        }
    }

    /// Every role of every input is present in the result, and nothing else.
    #[test]
    fn merge_keeps_exactly_the_union_of_roles(
        base in token_set_strategy(),
        layers in prop::collection::vec(token_set_strategy(), 0..4),
    ) {
        let merged = merge(&base, &layers);
        for role in base.roles().chain(layers.iter().flat_map(|l| l.roles())) {
            prop_assert!(merged.contains(role));
        }
        for role in merged.roles() {
            prop_assert!(base.contains(role) || layers.iter().any(|l| l.contains(role)));
        }
    }

    /// Roles no layer touches keep the base value.
    #[test]
    fn untouched_roles_keep_base_value(
        base in token_set_strategy(),
        layers in prop::collection::vec(token_set_strategy(), 0..4),
    ) {
        let merged = merge(&base, &layers);
        for (role, value) in base.iter() {
            if !layers.iter().any(|l| l.contains(role)) {
                prop_assert_eq!(merged.get(role), Some(value));
            }
        }
    }

    /// A chain preserves its input exactly.
    #[test]
    fn chain_preserves_input_order(values in prop::collection::vec(fallback_strategy(), 1..6)) {
        let chain = build_chain(values.clone()).unwrap();
        prop_assert_eq!(chain.entries(), values.as_slice());
        prop_assert_eq!(chain.legacy(), &values[0]);
        prop_assert_eq!(chain.preferred(), values.last().unwrap());
    }
}
