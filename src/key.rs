use std::fmt;

/// An untrusted identifier supplied by a requester.
///
/// `ResourceKey` marks a value from outside the trust boundary (query string,
/// form field, path segment) that a caller wants to use to pick a template,
/// partial or file. Nothing about it is assumed: it may be empty, huge, contain
/// `../`, NUL bytes or look-alike Unicode.
///
/// The only thing a key can do is be looked up in a [`Registry`](crate::Registry)
/// through [`resolve`](crate::resolve). It cannot be turned back into a string
/// and spliced into a path.
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow` or `Display`
/// - Inner value is only readable inside this crate
///
/// # Examples
///
/// ```
/// use resource_gate::ResourceKey;
///
/// let key = ResourceKey::new("../../../../etc/passwd");
///
/// // Debug output is available for development
/// assert!(format!("{:?}", key).contains("ResourceKey"));
///
/// // But the value cannot be used as a path:
/// // std::fs::read(key); // Won't compile!
/// ```
// BREAKING CHANGE WARNING: Do NOT remove Clone - handlers resolve the same key
// against a gate and then hand it to the audit sink.
#[derive(Clone, PartialEq, Eq)]
pub struct ResourceKey {
    // BREAKING CHANGE WARNING: This field MUST remain private.
    // A public field lets callers interpolate raw input into a locator (CWE-22).
    raw: String,
}

impl ResourceKey {
    /// Wraps an untrusted value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Borrows the raw value for lookup or auditing.
    ///
    /// BREAKING CHANGE WARNING: Changing visibility to `pub` reopens the
    /// interpolation path this type exists to close.
    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the length of the raw value in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the raw value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

// BREAKING CHANGE WARNING: Do NOT add Deref, AsRef<str>, Borrow<str>, Display or
// Into<String>. Any of them gives untrusted input a way into path templates.

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceKey").field("raw", &self.raw).finish()
    }
}
