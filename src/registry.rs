//! The closed set of keys a gate will accept.
//!
//! A [`Registry`] is built once, at startup, from operator-vetted data and is
//! read-only afterwards. It is `Send + Sync` and can be shared behind an `Arc`
//! by any number of request handlers without locking.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::resource::ResourceRef;

/// How incoming keys are compared against registered keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyMatching {
    /// Byte-for-byte string equality
    #[default]
    Exact,
    /// ASCII letters are lowercased at registration and before lookup.
    /// Registered keys must be ASCII, and a non-ASCII incoming key never
    /// matches.
    CaseInsensitive,
}

impl KeyMatching {
    fn fold(self, key: &str) -> String {
        match self {
            KeyMatching::Exact => key.to_string(),
            KeyMatching::CaseInsensitive => key.to_ascii_lowercase(),
        }
    }
}

/// Immutable mapping from allowed keys to trusted resource references.
///
/// # Examples
///
/// ```
/// use resource_gate::{KeyMatching, Registry};
///
/// let registry = Registry::builder()
///     .register("home", "pages/home")?
///     .register("about", "pages/about")?
///     .build();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.matching(), KeyMatching::Exact);
/// # Ok::<(), resource_gate::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, ResourceRef>,
    matching: KeyMatching,
}

impl Registry {
    /// Starts an exact-match registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new(KeyMatching::Exact)
    }

    /// Starts a registry with the given matching mode.
    pub fn builder_with(matching: KeyMatching) -> RegistryBuilder {
        RegistryBuilder::new(matching)
    }

    /// A registry that rejects every key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the matching mode this registry was built with.
    pub fn matching(&self) -> KeyMatching {
        self.matching
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over registered keys in their stored (folded) form.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Looks up a raw key. Only [`resolve`](crate::resolve) should call this.
    pub(crate) fn lookup(&self, raw: &str) -> Option<&ResourceRef> {
        match self.matching {
            KeyMatching::Exact => self.entries.get(raw),
            // Unicode case mapping sends some symbols onto ASCII letters
            // (KELVIN SIGN to `k`), so only ASCII input is folded.
            KeyMatching::CaseInsensitive if !raw.is_ascii() => None,
            KeyMatching::CaseInsensitive => self.entries.get(&self.matching.fold(raw)),
        }
    }
}

/// Builder for [`Registry`].
///
/// Registration is the only way a key becomes resolvable.
#[derive(Debug)]
pub struct RegistryBuilder {
    entries: HashMap<String, ResourceRef>,
    matching: KeyMatching,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new(matching: KeyMatching) -> Self {
        Self {
            entries: HashMap::new(),
            matching,
        }
    }

    /// Registers `key` as an alias for `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] if the key (after folding) is
    /// already present. Silently overwriting would let a later entry replace
    /// a vetted one.
    ///
    /// Returns [`RegistryError::NonAsciiKey`] if a case-insensitive registry
    /// is given a key with non-ASCII characters.
    pub fn register(
        mut self,
        key: impl Into<String>,
        locator: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        if self.matching == KeyMatching::CaseInsensitive && !key.is_ascii() {
            return Err(RegistryError::NonAsciiKey { key });
        }
        match self.entries.entry(self.matching.fold(&key)) {
            Entry::Occupied(_) => return Err(RegistryError::DuplicateKey { key }),
            Entry::Vacant(slot) => {
                slot.insert(ResourceRef::new_unchecked(locator.into()));
            }
        }
        Ok(self)
    }

    /// Registers every pair from an iterator, stopping at the first duplicate.
    pub fn register_all<K, L>(
        self,
        pairs: impl IntoIterator<Item = (K, L)>,
    ) -> Result<Self, RegistryError>
    where
        K: Into<String>,
        L: Into<String>,
    {
        pairs
            .into_iter()
            .try_fold(self, |builder, (k, l)| builder.register(k, l))
    }

    /// Freezes the registry.
    pub fn build(self) -> Registry {
        tracing::debug!(
            entries = self.entries.len(),
            matching = ?self.matching,
            "registry built"
        );
        Registry {
            entries: self.entries,
            matching: self.matching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn registry_is_shareable() {
        assert_send_sync::<Registry>();
    }

    #[test]
    fn empty_registry_has_no_keys() {
        let registry = Registry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.keys().count(), 0);
        assert!(registry.lookup("anything").is_none());
    }

    #[test]
    fn exact_lookup_requires_identical_key() {
        let registry = Registry::builder()
            .register("home", "pages/home")
            .unwrap()
            .build();

        assert_eq!(registry.lookup("home").unwrap().as_str(), "pages/home");
        assert!(registry.lookup("Home").is_none());
        assert!(registry.lookup("home ").is_none());
        assert!(registry.lookup("hom").is_none());
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = Registry::builder()
            .register("home", "pages/home")
            .unwrap()
            .register("home", "pages/other")
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                key: "home".to_string()
            }
        );
    }

    #[test]
    fn case_insensitive_registry_folds_both_sides() {
        let registry = Registry::builder_with(KeyMatching::CaseInsensitive)
            .register("Home", "pages/home")
            .unwrap()
            .build();

        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["home"]);
        assert!(registry.lookup("HOME").is_some());
        assert!(registry.lookup("home").is_some());
    }

    #[test]
    fn case_insensitive_collision_is_a_duplicate() {
        let err = Registry::builder_with(KeyMatching::CaseInsensitive)
            .register("home", "pages/home")
            .unwrap()
            .register("HOME", "pages/shouting")
            .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateKey { key } if key == "HOME"));
    }

    #[test]
    fn case_insensitive_lookup_ignores_unicode_case_mappings() {
        let registry = Registry::builder_with(KeyMatching::CaseInsensitive)
            .register("kb", "pages/kb")
            .unwrap()
            .build();

        assert!(registry.lookup("KB").is_some());
        // KELVIN SIGN lowercases to `k` under Unicode rules
        assert!(registry.lookup("\u{212A}b").is_none());
        assert!(registry.lookup("\u{212A}B").is_none());
    }

    #[test]
    fn case_insensitive_registry_refuses_non_ascii_keys() {
        let err = Registry::builder_with(KeyMatching::CaseInsensitive)
            .register("caf\u{e9}", "pages/cafe")
            .unwrap_err();

        assert!(matches!(err, RegistryError::NonAsciiKey { .. }));
    }

    #[test]
    fn exact_registry_accepts_non_ascii_keys() {
        let registry = Registry::builder()
            .register("caf\u{e9}", "pages/cafe")
            .unwrap()
            .build();

        assert!(registry.lookup("caf\u{e9}").is_some());
        assert!(registry.lookup("cafe").is_none());
    }

    #[test]
    fn register_all_collects_pairs() {
        let registry = Registry::builder()
            .register_all([("home", "pages/home"), ("about", "pages/about")])
            .unwrap()
            .build();

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn aliases_may_share_a_locator() {
        let registry = Registry::builder()
            .register("home", "pages/home")
            .unwrap()
            .register("index", "pages/home")
            .unwrap()
            .build();

        assert_eq!(registry.lookup("home"), registry.lookup("index"));
    }
}
