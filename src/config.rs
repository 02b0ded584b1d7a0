//! TOML configuration for registries and ownership.
//!
//! ```toml
//! [registry.templates]
//! matching = "exact"            # or "case-insensitive"
//! [registry.templates.entries]
//! home = "pages/home"
//! about = "pages/about"
//!
//! [registry.partials.entries]
//! user_info = "users/info"
//!
//! [owners]
//! "files/q1-report.pdf" = "user-1"
//! ```
//!
//! Unknown tables and fields are errors, so a typo cannot silently drop an
//! allow-list.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::ResourceKind;
use crate::registry::KeyMatching;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// One allow-list per resource kind
    #[serde(default)]
    pub registry: BTreeMap<ResourceKind, RegistryConfig>,
    /// Resource locator to owner principal id
    #[serde(default)]
    pub owners: BTreeMap<String, String>,
}

/// Configuration for a single registry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// How keys are compared
    #[serde(default)]
    pub matching: KeyMatching,
    /// Allowed key to resource locator
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}
