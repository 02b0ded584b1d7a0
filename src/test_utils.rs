//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Keys an attacker would try: traversal, absolute paths, NUL bytes,
/// separators and encodings.
pub(crate) fn arb_hostile_key() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        Just("%2e%2e".to_string()),
        Just("..%2f".to_string()),
        Just("etc".to_string()),
        Just("passwd".to_string()),
        Just("\0".to_string()),
        "[a-z]{1,8}",
    ];
    let sep = prop_oneof![Just("/"), Just("\\"), Just("//")];

    (
        prop::option::of(sep.clone()),
        prop::collection::vec((segment, sep), 1..6),
    )
        .prop_map(|(lead, parts)| {
            let mut key = lead.unwrap_or_default().to_string();
            for (segment, sep) in parts {
                key.push_str(&segment);
                key.push_str(sep);
            }
            key
        })
}

/// Arbitrary strings, including control characters and non-ASCII.
pub(crate) fn arb_any_key(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(|chars| chars.into_iter().collect())
}
