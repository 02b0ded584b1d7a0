use std::fmt;
use std::sync::Arc;

/// A trusted reference to a server-side resource.
///
/// `ResourceRef` is what the rendering or file-delivery layer is allowed to
/// dereference: a canonical relative path or opaque handle that an operator
/// wrote into a [`Registry`](crate::Registry). A gate hands back the stored
/// value itself, cloned, never a string assembled from request input.
///
/// # Construction Invariants
///
/// There is no public constructor and no `From<String>`. Values come into
/// existence only when a registry is built, from operator-supplied locators.
///
/// # Examples
///
/// External code cannot fabricate a reference:
///
/// ```compile_fail
/// use resource_gate::ResourceRef;
///
/// let forged = ResourceRef::new("/etc/shadow");
/// ```
///
/// References obtained from a registry expose their locator:
///
/// ```
/// use resource_gate::{resolve, Registry, ResourceKey};
///
/// let registry = Registry::builder()
///     .register("home", "pages/home")
///     .unwrap()
///     .build();
///
/// let resource = resolve(&ResourceKey::new("home"), &registry).unwrap();
/// assert_eq!(resource.as_str(), "pages/home");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceRef {
    locator: Arc<str>,
}

impl ResourceRef {
    /// Creates a `ResourceRef` from an operator-supplied locator.
    ///
    /// # Safety (Policy-Level)
    ///
    /// `pub(crate)` so that only registry construction can mint references.
    /// Never call this with anything derived from a [`ResourceKey`](crate::ResourceKey).
    pub(crate) fn new_unchecked(locator: impl Into<Arc<str>>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    /// Returns the locator the rendering layer should use.
    pub fn as_str(&self) -> &str {
        &self.locator
    }

    /// Consumes the reference and returns the locator as an owned string.
    pub fn into_string(self) -> String {
        self.locator.to_string()
    }
}

impl AsRef<str> for ResourceRef {
    fn as_ref(&self) -> &str {
        &self.locator
    }
}

impl fmt::Debug for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceRef").field(&self.locator).finish()
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator)
    }
}
