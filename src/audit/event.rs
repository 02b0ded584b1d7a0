//! Audit event schema.

use std::fmt;

/// Upper bound on the stored form of a rejected key, in characters.
pub const MAX_AUDIT_KEY_CHARS: usize = 256;

/// Outcome recorded by an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The key is not in the registry
    NotAllowed,
    /// The key resolved but the principal may not use the resource
    Denied,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::NotAllowed => write!(f, "not_allowed"),
            AuditOutcome::Denied => write!(f, "denied"),
        }
    }
}

/// A structured record of a refused resource request.
///
/// # Safety Invariants
///
/// - The untrusted key is stored escaped, so it cannot inject line breaks or
///   terminal sequences into a log
/// - The stored key is bounded by [`MAX_AUDIT_KEY_CHARS`]; the original length
///   is kept separately
///
/// # Example
///
/// ```
/// use resource_gate::audit::{AuditEvent, AuditOutcome};
///
/// let event = AuditEvent::new("req-1", "templates", AuditOutcome::NotAllowed)
///     .with_key("../../etc/passwd\n");
///
/// assert_eq!(event.key(), Some("../../etc/passwd\\n"));
/// assert_eq!(event.key_len(), Some(17));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    request_id: String,
    /// Which registry refused the request (e.g. "templates")
    scope: String,
    outcome: AuditOutcome,
    /// Escaped, truncated form of the rejected key
    key: Option<String>,
    /// Byte length of the rejected key before escaping
    key_len: Option<usize>,
    /// Trusted locator, for ownership denials
    resource: Option<String>,
    principal: Option<String>,
}

impl AuditEvent {
    /// Creates a new audit event with required fields.
    pub fn new(
        request_id: impl Into<String>,
        scope: impl Into<String>,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            scope: scope.into(),
            outcome,
            key: None,
            key_len: None,
            resource: None,
            principal: None,
        }
    }

    /// Records the rejected raw key in its escaped, bounded form.
    pub fn with_key(mut self, raw: &str) -> Self {
        self.key = Some(bounded_escape(raw));
        self.key_len = Some(raw.len());
        self
    }

    /// Records the resolved resource locator.
    pub fn with_resource(mut self, locator: impl Into<String>) -> Self {
        self.resource = Some(locator.into());
        self
    }

    /// Records the principal making the request.
    pub fn with_principal(mut self, principal_id: impl Into<String>) -> Self {
        self.principal = Some(principal_id.into());
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the registry scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the escaped key, if one was recorded.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the raw key length in bytes, if a key was recorded.
    pub fn key_len(&self) -> Option<usize> {
        self.key_len
    }

    /// Returns the resource locator, if set.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns the principal id, if set.
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[outcome={}, scope={}, request_id={}",
            self.outcome, self.scope, self.request_id
        )?;

        if let Some(key) = &self.key {
            write!(f, ", key=\"{}\"", key)?;
        }
        if let Some(len) = self.key_len {
            write!(f, ", key_len={}", len)?;
        }
        if let Some(resource) = &self.resource {
            write!(f, ", resource={}", resource)?;
        }
        if let Some(principal) = &self.principal {
            write!(f, ", principal={}", principal)?;
        }

        write!(f, "]")
    }
}

/// Escapes `raw` and keeps its head and tail when it is too long to store.
fn bounded_escape(raw: &str) -> String {
    let escaped: Vec<char> = raw.escape_debug().collect();
    if escaped.len() <= MAX_AUDIT_KEY_CHARS {
        return escaped.into_iter().collect();
    }

    let keep = (MAX_AUDIT_KEY_CHARS - 3) / 2;
    let head: String = escaped[..keep].iter().collect();
    let tail: String = escaped[escaped.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}
