//! Integration tests for enforcement_pack lints.
//!
//! These run `cargo dylint` against the resource-gate crate at the repository
//! root rather than through a UI harness.

use std::process::Command;

const REPO_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../..");

#[test]
fn library_has_no_stdio_prints() {
    let output = Command::new("cargo")
        .args(["dylint", "--lib", "enforcement_pack", "--", "--manifest-path", "Cargo.toml"])
        .current_dir(REPO_ROOT)
        .output()
        .expect("failed to run cargo dylint");

    assert!(
        output.status.success(),
        "dylint should pass on resource-gate, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn no_stdio_print_is_registered_at_deny() {
    let output = Command::new("cargo")
        .args(["dylint", "list", "--lib", "enforcement_pack"])
        .current_dir(REPO_ROOT)
        .output()
        .expect("failed to run cargo dylint list");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("enforcement_pack::no_stdio_print"));
    assert!(stdout.contains("deny"));
}
