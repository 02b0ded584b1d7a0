//! Allow-list gate for untrusted resource identifiers.
//!
//! Web applications routinely let a request pick a template, partial or file
//! by name. Passing that name straight to a renderer lets `../../etc/passwd`
//! through. This crate replaces interpolation with lookup:
//! - **Keys**: request input arrives as an opaque [`ResourceKey`]
//! - **Registries**: an operator-vetted, immutable [`Registry`] maps allowed
//!   keys to trusted [`ResourceRef`]s
//! - **Gates**: [`resolve`] returns the stored reference or
//!   [`GateError::NotAllowed`], and nothing else
//!
//! There is no blacklist, no canonicalization and no filesystem check. A key
//! that is not registered does not resolve, however it is spelled.
//!
//! # Core Types
//!
//! - [`ResourceKey`]: untrusted identifier with no path-like conversions
//! - [`ResourceRef`]: trusted locator, only minted by registries
//! - [`Registry`]: closed key set, exact match by default
//! - [`ResourceGate`]: registry plus optional [`audit::AuditSink`]
//! - [`Catalog`]: one registry per [`ResourceKind`], loadable from TOML
//! - [`Ownership`]: owner check layered after the gate
//!
//! # Examples
//!
//! ```
//! use resource_gate::{resolve, GateError, Registry, ResourceKey};
//!
//! let registry = Registry::builder()
//!     .register("home", "pages/home")?
//!     .register("about", "pages/about")?
//!     .build();
//!
//! assert_eq!(
//!     resolve(&ResourceKey::new("home"), &registry).unwrap().as_str(),
//!     "pages/home"
//! );
//! assert_eq!(
//!     resolve(&ResourceKey::new("../../../etc/passwd"), &registry),
//!     Err(GateError::NotAllowed)
//! );
//! assert_eq!(
//!     resolve(&ResourceKey::new("Home"), &registry),
//!     Err(GateError::NotAllowed)
//! );
//! # Ok::<(), resource_gate::RegistryError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access;
pub mod audit;
mod catalog;
mod config;
mod error;
mod gate;
mod key;
mod registry;
mod request;
mod resource;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use access::Ownership;
pub use catalog::{Catalog, ResourceKind};
pub use config::{CatalogConfig, RegistryConfig};
pub use error::{Error, GateError, RegistryError, Violation, ViolationKind};
pub use gate::{resolve, ResourceGate};
pub use key::ResourceKey;
pub use registry::{KeyMatching, Registry, RegistryBuilder};
pub use request::Principal;
pub use resource::ResourceRef;
