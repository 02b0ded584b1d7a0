//! Extraction boundary trait for web integration.

use crate::key::ResourceKey;
use crate::request::Principal;

/// Pulls what a handler needs out of a framework-specific request.
///
/// Every parameter comes back as a [`ResourceKey`], so untrusted input is
/// marked at the moment it crosses the boundary.
///
/// # Design Notes
///
/// This trait intentionally does NOT authenticate, authorize or resolve. It
/// only maps framework types to this crate's types.
///
/// # Examples
///
/// ```
/// use resource_gate::web::ExtractKeys;
/// use resource_gate::{Principal, ResourceKey};
///
/// struct MyFrameworkRequest {
///     id: String,
///     template: Option<String>,
/// }
///
/// impl ExtractKeys for MyFrameworkRequest {
///     fn request_id(&self) -> &str {
///         &self.id
///     }
///
///     fn principal(&self) -> Option<&Principal> {
///         None
///     }
///
///     fn param(&self, name: &str) -> Option<ResourceKey> {
///         match name {
///             "template" => self.template.clone().map(ResourceKey::new),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ExtractKeys {
    /// Unique identifier for this request, used to correlate audit events.
    fn request_id(&self) -> &str;

    /// Authenticated principal, if the framework established one.
    fn principal(&self) -> Option<&Principal>;

    /// Returns the named request parameter as an untrusted key.
    fn param(&self, name: &str) -> Option<ResourceKey>;
}
