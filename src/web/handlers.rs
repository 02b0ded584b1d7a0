//! Reference handlers for the three ways a request can pick a resource.
//!
//! Each handler takes one parameter, resolves it through the gate for its
//! resource kind and returns a [`Response`]. They differ only in which
//! rejection they map a refusal to:
//!
//! | handler          | parameter  | kind      | refusal |
//! |------------------|------------|-----------|---------|
//! | `show_template`  | `template` | templates | 400     |
//! | `render_partial` | `partial`  | partials  | 404     |
//! | `download`       | `id`       | files     | 403     |
//!
//! A missing parameter is refused the same way as an unknown one.

use crate::catalog::{Catalog, ResourceKind};
use crate::error::{Error, GateError};
use crate::resource::ResourceRef;

use super::{ExtractKeys, Rejection, Response};

/// Renders the template named by the `template` parameter.
///
/// # Examples
///
/// ```
/// use resource_gate::web::{handlers::show_template, RequestAdapter};
/// use resource_gate::Catalog;
///
/// let catalog = Catalog::from_toml_str(r#"
///     [registry.templates.entries]
///     about = "pages/about"
/// "#)?;
///
/// let mut request = RequestAdapter::new("req-1".to_string());
/// request.add_query_param("template".to_string(), "about".to_string());
///
/// let response = show_template(&request, &catalog);
/// assert_eq!(response.resource().unwrap().as_str(), "pages/about");
/// # Ok::<(), resource_gate::RegistryError>(())
/// ```
pub fn show_template(request: &impl ExtractKeys, catalog: &Catalog) -> Response {
    match select(request, catalog, ResourceKind::Template, "template") {
        Ok(resource) => Response::Template(resource),
        Err(_) => Response::Reject(Rejection::BadRequest),
    }
}

/// Renders the partial named by the `partial` parameter.
pub fn render_partial(request: &impl ExtractKeys, catalog: &Catalog) -> Response {
    match select(request, catalog, ResourceKind::Partial, "partial") {
        Ok(resource) => Response::Partial(resource),
        Err(_) => Response::Reject(Rejection::NotFound),
    }
}

/// Sends the file named by the `id` parameter, if the principal owns it.
///
/// Unknown ids, anonymous requests and files owned by someone else all get
/// the same 403, so the response does not reveal which ids exist.
pub fn download(request: &impl ExtractKeys, catalog: &Catalog) -> Response {
    match authorized_file(request, catalog) {
        Ok(resource) => Response::SendFile(resource),
        Err(_) => Response::Reject(Rejection::Forbidden),
    }
}

fn authorized_file(request: &impl ExtractKeys, catalog: &Catalog) -> Result<ResourceRef, Error> {
    let resource = select(request, catalog, ResourceKind::File, "id")?;

    if let Err(violation) = catalog
        .ownership()
        .authorize(request.principal(), &resource)
    {
        catalog.gate(ResourceKind::File).audit_denied(
            request.request_id(),
            &resource,
            request.principal().map(|p| p.id.as_str()),
        );
        tracing::debug!(
            request_id = %request.request_id(),
            kind = %violation.kind,
            "file download denied"
        );
        return Err(violation.into());
    }

    Ok(resource)
}

fn select(
    request: &impl ExtractKeys,
    catalog: &Catalog,
    kind: ResourceKind,
    param: &str,
) -> Result<ResourceRef, GateError> {
    let request_id = request.request_id();

    let Some(key) = request.param(param) else {
        tracing::debug!(request_id = %request_id, kind = %kind, param, "parameter missing");
        return Err(GateError::NotAllowed);
    };

    let result = catalog.gate(kind).resolve(request_id, &key);
    match &result {
        Ok(resource) => tracing::debug!(
            request_id = %request_id,
            kind = %kind,
            resource = %resource,
            "resource selected"
        ),
        // The key itself only goes to the audit sink.
        Err(_) => tracing::debug!(request_id = %request_id, kind = %kind, "resource refused"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Principal;
    use crate::web::RequestAdapter;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
            [registry.templates.entries]
            home = "pages/home"
            about = "pages/about"

            [registry.partials.entries]
            user_info = "users/info"
            user_stats = "users/stats"

            [registry.files.entries]
            "7" = "files/alice-taxes.pdf"
            "8" = "files/bob-taxes.pdf"

            [owners]
            "files/alice-taxes.pdf" = "user-alice"
            "files/bob-taxes.pdf" = "user-bob"
            "#,
        )
        .unwrap()
    }

    fn request(param: &str, value: &str) -> RequestAdapter {
        let mut adapter = RequestAdapter::new("req-test".to_string());
        adapter.add_query_param(param.to_string(), value.to_string());
        adapter
    }

    fn alice() -> Principal {
        Principal {
            id: "user-alice".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn template_is_rendered() {
        let response = show_template(&request("template", "home"), &catalog());
        assert!(matches!(response, Response::Template(r) if r.as_str() == "pages/home"));
    }

    #[test]
    fn template_traversal_is_bad_request() {
        let response = show_template(&request("template", "../../../../etc/passwd"), &catalog());
        assert_eq!(response, Response::Reject(Rejection::BadRequest));
    }

    #[test]
    fn missing_template_param_is_bad_request() {
        let adapter = RequestAdapter::new("req-test".to_string());
        assert_eq!(
            show_template(&adapter, &catalog()),
            Response::Reject(Rejection::BadRequest)
        );
    }

    #[test]
    fn missing_param_does_not_select_empty_key() {
        let catalog = Catalog::from_toml_str(
            r#"
            [registry.templates.entries]
            "" = "pages/landing"
            "#,
        )
        .unwrap();

        let absent = RequestAdapter::new("req-test".to_string());
        assert_eq!(
            show_template(&absent, &catalog),
            Response::Reject(Rejection::BadRequest)
        );

        let empty = show_template(&request("template", ""), &catalog);
        assert!(matches!(empty, Response::Template(r) if r.as_str() == "pages/landing"));
    }

    #[test]
    fn partial_is_rendered() {
        let response = render_partial(&request("partial", "user_stats"), &catalog());
        assert!(matches!(response, Response::Partial(r) if r.as_str() == "users/stats"));
    }

    #[test]
    fn partial_traversal_is_not_found() {
        let response = render_partial(
            &request("partial", "../../../../config/database"),
            &catalog(),
        );
        assert_eq!(response, Response::Reject(Rejection::NotFound));
    }

    #[test]
    fn template_key_does_not_select_partial() {
        let response = render_partial(&request("partial", "home"), &catalog());
        assert_eq!(response, Response::Reject(Rejection::NotFound));
    }

    #[test]
    fn owner_can_download() {
        let mut adapter = request("id", "7");
        adapter.set_principal(Some(alice()));

        let response = download(&adapter, &catalog());
        assert!(
            matches!(response, Response::SendFile(r) if r.as_str() == "files/alice-taxes.pdf")
        );
    }

    #[test]
    fn download_refusals_are_indistinguishable() {
        let catalog = catalog();

        let mut not_owner = request("id", "8");
        not_owner.set_principal(Some(alice()));

        let mut unknown = request("id", "/etc/shadow");
        unknown.set_principal(Some(alice()));

        let anonymous = request("id", "7");

        for adapter in [not_owner, unknown, anonymous] {
            assert_eq!(
                download(&adapter, &catalog),
                Response::Reject(Rejection::Forbidden)
            );
        }
    }
}
