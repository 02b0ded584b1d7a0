use std::fmt;

/// Errors that can occur anywhere in the resource gate crate.
#[derive(Debug)]
pub enum Error {
    /// A key was rejected by a gate
    Gate(GateError),
    /// A registry or catalog could not be built
    Registry(RegistryError),
    /// An ownership check failed on an already-resolved resource
    Violation(Violation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gate(e) => write!(f, "{}", e),
            Error::Registry(e) => write!(f, "registry error: {}", e),
            Error::Violation(v) => write!(f, "access violation: {}", v),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gate(e) => Some(e),
            Error::Registry(e) => Some(e),
            Error::Violation(v) => Some(v),
        }
    }
}

impl From<GateError> for Error {
    fn from(e: GateError) -> Self {
        Error::Gate(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// Error returned when a key does not resolve.
///
/// There is deliberately a single kind. Unknown, malformed and hostile keys all
/// end up here, and the rendered message never contains the key itself, so a
/// requester cannot tell "does not exist" apart from "not permitted".
///
/// # Examples
///
/// ```
/// use resource_gate::GateError;
///
/// let err = GateError::NotAllowed;
/// assert_eq!(err.to_string(), "resource not allowed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// The key is not a member of the registry
    NotAllowed,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::NotAllowed => write!(f, "resource not allowed"),
        }
    }
}

impl std::error::Error for GateError {}

/// Error raised while building a registry or loading its configuration.
///
/// These happen at startup, from operator-supplied data, so unlike
/// [`GateError`] they carry detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same key was registered twice (after folding, for
    /// case-insensitive registries)
    DuplicateKey {
        /// The key as it was passed to the second registration
        key: String,
    },
    /// A case-insensitive registry was given a key with non-ASCII characters
    NonAsciiKey {
        /// The key as it was passed to registration
        key: String,
    },
    /// The configuration document could not be parsed
    Config {
        /// Parser message
        message: String,
    },
    /// The configuration file could not be read
    Io {
        /// Underlying I/O message
        message: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateKey { key } => write!(f, "duplicate key {:?}", key),
            RegistryError::NonAsciiKey { key } => {
                write!(f, "case-insensitive key {:?} is not ASCII", key)
            }
            RegistryError::Config { message } => write!(f, "invalid configuration: {}", message),
            RegistryError::Io { message } => write!(f, "cannot read configuration: {}", message),
        }
    }
}

impl std::error::Error for RegistryError {}

/// An access violation with details about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of access violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// No principal is attached to the request
    Unauthenticated,
    /// The principal does not own the resource
    NotOwner,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Unauthenticated => write!(f, "Unauthenticated"),
            ViolationKind::NotOwner => write!(f, "Not owner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_error_display_is_generic() {
        assert_eq!(GateError::NotAllowed.to_string(), "resource not allowed");
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError::DuplicateKey {
            key: "home".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key \"home\"");

        let err = RegistryError::Config {
            message: "expected a table".to_string(),
        };
        assert!(err.to_string().contains("expected a table"));
    }

    #[test]
    fn violation_display_includes_kind() {
        let v = Violation::new(ViolationKind::NotOwner, "resource belongs to another user");
        assert_eq!(v.to_string(), "Not owner: resource belongs to another user");
    }

    #[test]
    fn error_wraps_each_layer() {
        let e: Error = GateError::NotAllowed.into();
        assert!(matches!(e, Error::Gate(GateError::NotAllowed)));
        assert!(std::error::Error::source(&e).is_some());

        let e: Error = Violation::new(ViolationKind::Unauthenticated, "no principal").into();
        assert!(e.to_string().starts_with("access violation"));
    }
}
