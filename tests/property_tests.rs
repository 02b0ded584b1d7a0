//! Integration property tests for resource-gate.
//!
//! These tests validate the allow-list invariants across arbitrary registries
//! and arbitrary, often hostile, keys.

use std::collections::BTreeMap;

use proptest::prelude::*;
use resource_gate::{resolve, GateError, KeyMatching, Registry, ResourceKey};

// Strategy: a small registry of plain keys to plain locators
fn arb_entries() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z_]{0,12}", "[a-z]{1,8}/[a-z_]{1,12}", 0..8)
}

fn build(entries: &BTreeMap<String, String>) -> Registry {
    Registry::builder()
        .register_all(entries.iter().map(|(k, v)| (k.clone(), v.clone())))
        .unwrap()
        .build()
}

proptest! {
    /// Property: every registered key resolves to exactly its stored locator
    #[test]
    fn proptest_registered_keys_resolve_to_stored_ref(entries in arb_entries()) {
        let registry = build(&entries);

        for (key, locator) in &entries {
            let resource = resolve(&ResourceKey::new(key.as_str()), &registry).unwrap();
            prop_assert_eq!(resource.as_str(), locator.as_str());

            // Repeated calls return the same value
            let again = resolve(&ResourceKey::new(key.as_str()), &registry).unwrap();
            prop_assert_eq!(again, resource);
        }
    }

    /// Property: any key outside the registered set is rejected
    #[test]
    fn proptest_unregistered_keys_are_rejected(
        entries in arb_entries(),
        raw in any::<String>()
    ) {
        prop_assume!(!entries.contains_key(&raw));
        let registry = build(&entries);

        prop_assert_eq!(
            resolve(&ResourceKey::new(raw), &registry),
            Err(GateError::NotAllowed)
        );
    }

    /// Property: no key derived from a registered key by traversal, prefixing
    /// or suffixing becomes resolvable
    #[test]
    fn proptest_near_misses_are_rejected(
        entries in arb_entries(),
        prefix in prop_oneof![Just("../"), Just("/"), Just("./"), Just("../../../../")],
        suffix in prop_oneof![Just("/"), Just("\0"), Just(".erb"), Just("/../x")]
    ) {
        let registry = build(&entries);

        for key in entries.keys() {
            for candidate in [format!("{}{}", prefix, key), format!("{}{}", key, suffix)] {
                prop_assert_eq!(
                    resolve(&ResourceKey::new(candidate), &registry),
                    Err(GateError::NotAllowed)
                );
            }
        }
    }

    /// Property: changing the case of a registered key rejects it under exact
    /// matching and accepts it under explicit case-insensitive matching
    #[test]
    fn proptest_case_folding_is_opt_in(key in "[a-z]{1,12}") {
        let upper = key.to_uppercase();

        let exact = Registry::builder().register(key.as_str(), "pages/x").unwrap().build();
        prop_assert!(resolve(&ResourceKey::new(upper.as_str()), &exact).is_err());

        let folded = Registry::builder_with(KeyMatching::CaseInsensitive)
            .register(key.as_str(), "pages/x")
            .unwrap()
            .build();
        prop_assert!(resolve(&ResourceKey::new(upper.as_str()), &folded).is_ok());
    }

    /// Property: a case-insensitive registry never matches a key containing
    /// non-ASCII characters, whatever that key lowercases to
    #[test]
    fn proptest_case_folding_is_ascii_only(
        key in "[a-z]{1,12}",
        at in 0usize..12,
        odd in prop_oneof![Just('\u{212A}'), Just('\u{130}'), Just('\u{17F}'), Just('\u{FF41}')]
    ) {
        let folded = Registry::builder_with(KeyMatching::CaseInsensitive)
            .register(key.as_str(), "pages/x")
            .unwrap()
            .build();

        let mut chars: Vec<char> = key.chars().collect();
        let at = at % chars.len();
        chars[at] = odd;
        let candidate: String = chars.into_iter().collect();

        prop_assert_eq!(
            resolve(&ResourceKey::new(candidate), &folded),
            Err(GateError::NotAllowed)
        );
    }
}
