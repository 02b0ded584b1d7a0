//! Request adapter for mapping HTTP requests to resource-gate types.

use std::collections::HashMap;

use crate::key::ResourceKey;
use crate::request::Principal;

use super::ExtractKeys;

/// Owned, framework-agnostic view of an incoming request.
///
/// Framework integrations can fill one of these from their own request type,
/// or implement [`ExtractKeys`] directly.
///
/// # Examples
///
/// ```
/// use resource_gate::web::{ExtractKeys, RequestAdapter};
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.add_query_param("template".to_string(), "../../../../etc/passwd".to_string());
///
/// assert_eq!(adapter.request_id(), "req-12345");
/// assert!(adapter.param("template").is_some());
/// assert!(adapter.param("partial").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    request_id: String,
    principal: Option<Principal>,
    /// Query parameters from the URL (all untrusted)
    query_params: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates a new request adapter with the given request ID.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            principal: None,
            query_params: HashMap::new(),
        }
    }

    /// Sets the authenticated principal for this request.
    ///
    /// This should be called by framework middleware after it has validated
    /// a session or token.
    pub fn set_principal(&mut self, principal: Option<Principal>) {
        self.principal = principal;
    }

    /// Adds a query parameter, replacing any earlier value for the same name.
    pub fn add_query_param(&mut self, name: String, value: String) {
        self.query_params.insert(name, value);
    }
}

impl ExtractKeys for RequestAdapter {
    fn request_id(&self) -> &str {
        &self.request_id
    }

    fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    fn param(&self, name: &str) -> Option<ResourceKey> {
        self.query_params.get(name).map(|v| ResourceKey::new(v.as_str()))
    }
}
