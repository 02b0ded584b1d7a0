use std::fmt;
use std::sync::Arc;

use crate::{
    audit::{AuditEvent, AuditOutcome, AuditSink},
    error::GateError,
    key::ResourceKey,
    registry::Registry,
    resource::ResourceRef,
};

/// Resolves an untrusted key against a registry.
///
/// This is the entire trust boundary: `key` selects a resource only if it is a
/// member of `registry`. The returned reference is the value stored in the
/// registry, cloned, never a string built from `key`.
///
/// The function is pure. It touches no filesystem, does not canonicalize, and
/// does not scan for `..` or absolute prefixes; anything outside the closed
/// key set is simply absent.
///
/// # Errors
///
/// Returns [`GateError::NotAllowed`] for every key that is not registered.
///
/// # Examples
///
/// ```
/// use resource_gate::{resolve, GateError, Registry, ResourceKey};
///
/// let registry = Registry::builder()
///     .register("home", "pages/home")?
///     .register("about", "pages/about")?
///     .build();
///
/// let home = resolve(&ResourceKey::new("home"), &registry).unwrap();
/// assert_eq!(home.as_str(), "pages/home");
///
/// let escape = resolve(&ResourceKey::new("../../../etc/passwd"), &registry);
/// assert_eq!(escape, Err(GateError::NotAllowed));
/// # Ok::<(), resource_gate::RegistryError>(())
/// ```
pub fn resolve(key: &ResourceKey, registry: &Registry) -> Result<ResourceRef, GateError> {
    registry
        .lookup(key.as_str())
        .cloned()
        .ok_or(GateError::NotAllowed)
}

/// A registry bound to a scope name and an optional audit sink.
///
/// `ResourceGate` is what request handlers hold. It is `Send + Sync` and cheap
/// to clone, so one instance built at startup can serve every request.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use resource_gate::{Registry, ResourceGate, ResourceKey};
/// use resource_gate::audit::AuditTrail;
///
/// let registry = Registry::builder()
///     .register("user_info", "users/info")?
///     .build();
/// let trail = Arc::new(AuditTrail::new());
///
/// let gate = ResourceGate::new("partials", registry).with_audit(trail.clone());
///
/// assert!(gate.resolve("req-1", &ResourceKey::new("user_info")).is_ok());
/// assert!(gate.resolve("req-2", &ResourceKey::new("../../config/database")).is_err());
///
/// // Only the refusal is audited
/// assert_eq!(trail.len(), 1);
/// # Ok::<(), resource_gate::RegistryError>(())
/// ```
#[derive(Clone)]
pub struct ResourceGate {
    scope: Arc<str>,
    registry: Arc<Registry>,
    audit: Option<Arc<dyn AuditSink>>,
}

impl ResourceGate {
    /// Creates a gate over `registry` with no audit sink.
    ///
    /// `scope` names the registry in audit events (e.g. "templates").
    pub fn new(scope: impl Into<Arc<str>>, registry: impl Into<Arc<Registry>>) -> Self {
        Self {
            scope: scope.into(),
            registry: registry.into(),
            audit: None,
        }
    }

    /// Attaches a sink that is called for every refused key.
    pub fn with_audit(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Returns the scope name.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves `key`, reporting a refusal to the audit sink if one is attached.
    ///
    /// The outcome is exactly that of [`resolve`]; auditing never changes it.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::NotAllowed`] for every key that is not registered.
    pub fn resolve(&self, request_id: &str, key: &ResourceKey) -> Result<ResourceRef, GateError> {
        let result = resolve(key, &self.registry);

        if result.is_err() {
            if let Some(sink) = &self.audit {
                let event = AuditEvent::new(request_id, &*self.scope, AuditOutcome::NotAllowed)
                    .with_key(key.as_str());
                sink.record(&event);
            }
        }

        result
    }

    /// Reports an ownership refusal on a resource this gate resolved.
    pub(crate) fn audit_denied(
        &self,
        request_id: &str,
        resource: &ResourceRef,
        principal: Option<&str>,
    ) {
        if let Some(sink) = &self.audit {
            let mut event = AuditEvent::new(request_id, &*self.scope, AuditOutcome::Denied)
                .with_resource(resource.as_str());
            if let Some(id) = principal {
                event = event.with_principal(id);
            }
            sink.record(&event);
        }
    }
}

impl fmt::Debug for ResourceGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceGate")
            .field("scope", &self.scope)
            .field("entries", &self.registry.len())
            .field("audited", &self.audit.is_some())
            .finish()
    }
}
