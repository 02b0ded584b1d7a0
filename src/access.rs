//! Ownership check for resources that have already passed a gate.
//!
//! Resolving a key answers "is this a resource we serve at all?". Whether the
//! current principal may have it is a separate question, asked only of a
//! trusted [`ResourceRef`], never of raw input.

use std::collections::HashMap;

use crate::error::{Violation, ViolationKind};
use crate::request::Principal;
use crate::resource::ResourceRef;

/// Maps trusted resource locators to the id of the principal that owns them.
///
/// Like a [`Registry`](crate::Registry), an `Ownership` table is built at
/// startup and read-only afterwards.
///
/// # Examples
///
/// ```
/// use resource_gate::{resolve, Ownership, Principal, Registry, ResourceKey};
///
/// let files = Registry::builder()
///     .register("42", "files/q1-report.pdf")?
///     .build();
/// let ownership = Ownership::new().assign("files/q1-report.pdf", "user-1");
///
/// let resource = resolve(&ResourceKey::new("42"), &files).unwrap();
/// let alice = Principal { id: "user-1".to_string(), name: "Alice".to_string() };
///
/// assert!(ownership.authorize(Some(&alice), &resource).is_ok());
/// assert!(ownership.authorize(None, &resource).is_err());
/// # Ok::<(), resource_gate::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ownership {
    owners: HashMap<String, String>,
}

impl Ownership {
    /// Creates an empty table. Every check against it fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `owner_id` as the owner of `locator`, replacing any previous owner.
    pub fn assign(mut self, locator: impl Into<String>, owner_id: impl Into<String>) -> Self {
        self.owners.insert(locator.into(), owner_id.into());
        self
    }

    /// Returns the owner id for a resource, if one is recorded.
    pub fn owner_of(&self, resource: &ResourceRef) -> Option<&str> {
        self.owners.get(resource.as_str()).map(String::as_str)
    }

    /// Number of owned resources.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns true if no resource has an owner.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Checks that `principal` owns `resource`.
    ///
    /// A resource with no recorded owner belongs to nobody.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` of kind `Unauthenticated` when there is no
    /// principal, and `NotOwner` when the owner is missing or different.
    pub fn authorize<'r>(
        &self,
        principal: Option<&Principal>,
        resource: &'r ResourceRef,
    ) -> Result<&'r ResourceRef, Violation> {
        let principal = principal.ok_or_else(|| {
            Violation::new(
                ViolationKind::Unauthenticated,
                "Ownership check requires a principal",
            )
        })?;

        match self.owner_of(resource) {
            Some(owner) if owner == principal.id => Ok(resource),
            _ => Err(Violation::new(
                ViolationKind::NotOwner,
                "Principal does not own the resource",
            )),
        }
    }
}
