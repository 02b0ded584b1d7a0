//! Enforcement pack: custom lints for resource-gate invariants.
//!
//! ## Implemented Lints
//!
//! - `NO_STDIO_PRINT`: Forbids `print!`, `println!`, `eprint!`, `eprintln!`
//!   and `dbg!` in library code. Rejected keys are attacker-controlled and must
//!   only leave the crate through an `AuditSink`, escaped and bounded.

#![feature(rustc_private)]
#![warn(unused_extern_crates)]

extern crate rustc_ast;
extern crate rustc_lint;
extern crate rustc_session;
extern crate rustc_span;

use rustc_ast::{Expr, ExprKind, MacCall};
use rustc_lint::{EarlyContext, EarlyLintPass, LintContext};
use rustc_session::{declare_lint_pass, declare_tool_lint};

declare_tool_lint! {
    /// **What it does:** Forbids macros that write straight to stdout/stderr.
    ///
    /// **Why is this bad?** Output from these macros skips the audit path:
    /// - A rejected key printed raw can forge log lines or terminal sequences
    /// - Nothing bounds its length
    /// - It is invisible to the `resource_audit` tracing target
    ///
    /// **Example:**
    /// ```rust,ignore
    /// // Bad
    /// eprintln!("rejected key: {}", raw);
    ///
    /// // Good
    /// sink.record(&AuditEvent::new(request_id, scope, AuditOutcome::NotAllowed).with_key(raw));
    /// ```
    pub enforcement_pack::NO_STDIO_PRINT,
    Deny,
    "use of a stdout/stderr printing macro; use tracing or an AuditSink instead"
}

declare_lint_pass!(NoStdioPrint => [NO_STDIO_PRINT]);

/// Forbidden macro name and the replacement to suggest.
const FORBIDDEN: &[(&str, &str)] = &[
    ("print", "tracing::info!"),
    ("println", "tracing::info!"),
    ("eprint", "tracing::warn!"),
    ("eprintln", "tracing::warn!"),
    ("dbg", "tracing::debug!"),
];

impl EarlyLintPass for NoStdioPrint {
    fn check_expr(&mut self, cx: &EarlyContext<'_>, expr: &Expr) {
        if let ExprKind::MacCall(mac) = &expr.kind {
            check_macro(cx, mac, expr.span);
        }
    }
}

fn check_macro(cx: &EarlyContext<'_>, mac: &MacCall, span: rustc_span::Span) {
    // Path-qualified calls (std::println!) resolve to the same macros.
    let Some(last) = mac.path.segments.last() else {
        return;
    };
    let name = last.ident.name.as_str();

    if let Some((macro_name, replacement)) = FORBIDDEN.iter().find(|(m, _)| *m == name) {
        cx.span_lint(NO_STDIO_PRINT, span, |diag| {
            diag.help(format!("use `{}` or record an `AuditEvent`", replacement));
            diag.note(format!("`{}!` bypasses the audit sink", macro_name));
        });
    }
}

#[unsafe(no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn register_lints(_sess: &rustc_session::Session, lint_store: &mut rustc_lint::LintStore) {
    lint_store.register_lints(&[&NO_STDIO_PRINT]);
    lint_store.register_early_pass(|| Box::new(NoStdioPrint));
}

#[unsafe(no_mangle)]
pub fn dylint_version() -> *mut std::os::raw::c_char {
    std::ffi::CString::new(dylint_linting::DYLINT_VERSION)
        .expect("version string contains null byte")
        .into_raw()
}
