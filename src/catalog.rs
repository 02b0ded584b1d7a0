//! One registry per kind of resource, plus ownership.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::access::Ownership;
use crate::audit::{AuditSink, TracingAudit};
use crate::config::CatalogConfig;
use crate::error::RegistryError;
use crate::gate::ResourceGate;
use crate::registry::Registry;

/// The kinds of resource a request may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum ResourceKind {
    /// Full-page templates
    #[serde(rename = "templates")]
    Template,
    /// Partial templates
    #[serde(rename = "partials")]
    Partial,
    /// Downloadable files
    #[serde(rename = "files")]
    File,
}

impl ResourceKind {
    /// Every kind, in configuration order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Template,
        ResourceKind::Partial,
        ResourceKind::File,
    ];

    /// Name used in configuration and audit events.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Template => "templates",
            ResourceKind::Partial => "partials",
            ResourceKind::File => "files",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every allow-list an application serves from, built once at startup.
///
/// A kind with no configured registry gets an empty one: its gate rejects
/// everything rather than falling back to anything.
///
/// Refusals go to [`TracingAudit`] unless another sink is attached with
/// [`Catalog::with_audit`].
///
/// # Examples
///
/// ```
/// use resource_gate::{Catalog, ResourceKey, ResourceKind};
///
/// let catalog = Catalog::from_toml_str(r#"
///     [registry.templates.entries]
///     home = "pages/home"
/// "#)?;
///
/// let templates = catalog.gate(ResourceKind::Template);
/// assert!(templates.resolve("req-1", &ResourceKey::new("home")).is_ok());
///
/// let partials = catalog.gate(ResourceKind::Partial);
/// assert!(partials.resolve("req-2", &ResourceKey::new("home")).is_err());
/// # Ok::<(), resource_gate::RegistryError>(())
/// ```
#[derive(Clone)]
pub struct Catalog {
    templates: ResourceGate,
    partials: ResourceGate,
    files: ResourceGate,
    ownership: Arc<Ownership>,
    audit: Arc<dyn AuditSink>,
}

impl Catalog {
    /// Creates a catalog with empty registries, no owners and a
    /// [`TracingAudit`] sink.
    pub fn new() -> Self {
        let audit: Arc<dyn AuditSink> = Arc::new(TracingAudit::new());
        let gate = |kind: ResourceKind| {
            ResourceGate::new(kind.as_str(), Registry::empty()).with_audit(Arc::clone(&audit))
        };

        Self {
            templates: gate(ResourceKind::Template),
            partials: gate(ResourceKind::Partial),
            files: gate(ResourceKind::File),
            ownership: Arc::new(Ownership::new()),
            audit: Arc::clone(&audit),
        }
    }

    /// Installs the registry for `kind`, replacing any previous one.
    pub fn with_registry(mut self, kind: ResourceKind, registry: Registry) -> Self {
        *self.gate_mut(kind) =
            ResourceGate::new(kind.as_str(), registry).with_audit(Arc::clone(&self.audit));
        self
    }

    /// Installs the ownership table.
    pub fn with_ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = Arc::new(ownership);
        self
    }

    /// Replaces the audit sink on every gate this catalog hands out.
    pub fn with_audit(mut self, sink: Arc<dyn AuditSink>) -> Self {
        for kind in ResourceKind::ALL {
            let gate = self.gate(kind).clone().with_audit(Arc::clone(&sink));
            *self.gate_mut(kind) = gate;
        }
        self.audit = sink;
        self
    }

    /// Builds a catalog from parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] if two keys of one registry
    /// collide after folding, or [`RegistryError::NonAsciiKey`] if a
    /// case-insensitive registry lists a non-ASCII key.
    pub fn from_config(config: CatalogConfig) -> Result<Self, RegistryError> {
        let mut catalog = Self::new();

        for (kind, section) in config.registry {
            let registry = Registry::builder_with(section.matching)
                .register_all(section.entries)?
                .build();
            tracing::info!(
                kind = %kind,
                entries = registry.len(),
                "registry loaded"
            );
            catalog = catalog.with_registry(kind, registry);
        }

        let ownership = config
            .owners
            .into_iter()
            .fold(Ownership::new(), |o, (locator, owner)| o.assign(locator, owner));

        Ok(catalog.with_ownership(ownership))
    }

    /// Parses a TOML document and builds a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Config`] if the document is malformed or
    /// contains unknown fields.
    pub fn from_toml_str(doc: &str) -> Result<Self, RegistryError> {
        let config: CatalogConfig = toml::from_str(doc).map_err(|e| RegistryError::Config {
            message: e.to_string(),
        })?;
        Self::from_config(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, otherwise as
    /// [`Catalog::from_toml_str`].
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let doc = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&doc)
    }

    /// Returns the registry for `kind`. Unconfigured kinds have an empty one.
    pub fn registry(&self, kind: ResourceKind) -> &Registry {
        self.gate(kind).registry()
    }

    /// Returns the gate over the registry for `kind`.
    pub fn gate(&self, kind: ResourceKind) -> &ResourceGate {
        match kind {
            ResourceKind::Template => &self.templates,
            ResourceKind::Partial => &self.partials,
            ResourceKind::File => &self.files,
        }
    }

    fn gate_mut(&mut self, kind: ResourceKind) -> &mut ResourceGate {
        match kind {
            ResourceKind::Template => &mut self.templates,
            ResourceKind::Partial => &mut self.partials,
            ResourceKind::File => &mut self.files,
        }
    }

    /// Returns the ownership table.
    pub fn ownership(&self) -> &Ownership {
        &self.ownership
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<_> = ResourceKind::ALL
            .iter()
            .map(|kind| (*kind, self.registry(*kind).len()))
            .collect();

        f.debug_struct("Catalog")
            .field("registries", &sizes)
            .field("owned", &self.ownership.len())
            .finish()
    }
}
