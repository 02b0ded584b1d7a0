//! Template, partial and download requests through the allow-list gates.
//!
//! This example shows:
//! 1. Loading a catalog of registries from TOML
//! 2. Registered keys selecting their vetted resources
//! 3. Traversal attempts rejected with generic responses
//! 4. Rejected keys reaching only the audit log
//!
//! Run with: `cargo run --example secure_render`


use resource_gate::web::{handlers, RequestAdapter, Response};
use resource_gate::{Catalog, Principal};

const CONFIG: &str = r#"
[registry.templates.entries]
home = "pages/home"
about = "pages/about"
contact = "pages/contact"
products = "pages/products"

[registry.partials.entries]
user_info = "users/info"
user_stats = "users/stats"
user_settings = "users/settings"

[registry.files.entries]
"17" = "storage/documents/17-contract.pdf"

[owners]
"storage/documents/17-contract.pdf" = "user-17"
"#;

fn request(id: &str, param: &str, value: &str) -> RequestAdapter {
    let mut adapter = RequestAdapter::new(id.to_string());
    adapter.add_query_param(param.to_string(), value.to_string());
    adapter
}

fn describe(response: &Response) -> String {
    match response {
        Response::Template(r) => format!("200 render template {}", r),
        Response::Partial(r) => format!("200 render partial {}", r),
        Response::SendFile(r) => format!("200 send file {}", r),
        Response::Reject(rejection) => rejection.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::WARN)
        .init();

    // Refusals are logged on the `resource_audit` target
    let catalog = Catalog::from_toml_str(CONFIG)?;
    println!("Loaded {:?}\n", catalog);

    println!("--- Templates ---");
    for value in ["home", "../../../../etc/passwd", "Home"] {
        let response = handlers::show_template(&request("req-t", "template", value), &catalog);
        println!("template={:<28} -> {}", format!("{:?}", value), describe(&response));
    }

    println!("\n--- Partials ---");
    for value in ["user_info", "../../../../config/database"] {
        let response = handlers::render_partial(&request("req-p", "partial", value), &catalog);
        println!("partial={:<29} -> {}", format!("{:?}", value), describe(&response));
    }

    println!("\n--- Downloads ---");
    let owner = Principal {
        id: "user-17".to_string(),
        name: "Dana".to_string(),
    };
    let stranger = Principal {
        id: "user-99".to_string(),
        name: "Eve".to_string(),
    };
    for (who, value) in [(&owner, "17"), (&stranger, "17"), (&owner, "/etc/shadow")] {
        let mut adapter = request("req-d", "id", value);
        adapter.set_principal(Some(who.clone()));
        let response = handlers::download(&adapter, &catalog);
        println!("{} id={:<14} -> {}", who.name, format!("{:?}", value), describe(&response));
    }

    Ok(())
}
