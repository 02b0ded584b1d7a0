//! Web framework integration surface.
//!
//! This module is the thin caller around the gate. It handles:
//! - Marking request parameters as untrusted [`ResourceKey`](crate::ResourceKey)s
//! - Routing each key through the gate for its resource kind
//! - Mapping refusals to generic responses
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: No HTTP crate is pulled in. Frameworks
//!    implement [`ExtractKeys`] or fill a [`RequestAdapter`], then translate
//!    the returned [`Response`] into their own types.
//!
//! 2. **Lookup, Never Interpolate**: A handler only ever delivers a
//!    [`ResourceRef`](crate::ResourceRef) that came out of a registry.
//!
//! 3. **No Fallback**: A refused key ends the request. There is no default
//!    template and no second resolution strategy.
//!
//! # Example Flow
//!
//! ```
//! use resource_gate::web::{handlers, RequestAdapter, Response, Rejection};
//! use resource_gate::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//!     [registry.templates.entries]
//!     home = "pages/home"
//! "#)?;
//!
//! let mut request = RequestAdapter::new("req-1".to_string());
//! request.add_query_param("template".to_string(), "../../../../etc/passwd".to_string());
//!
//! let response = handlers::show_template(&request, &catalog);
//! assert_eq!(response, Response::Reject(Rejection::BadRequest));
//! # Ok::<(), resource_gate::RegistryError>(())
//! ```

mod adapter;
mod extract;
pub mod handlers;
mod response;

pub use adapter::RequestAdapter;
pub use extract::ExtractKeys;
pub use response::{Rejection, Response};
