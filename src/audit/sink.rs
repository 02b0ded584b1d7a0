//! Audit sinks invoked by gates on refusal.

use super::AuditEvent;

/// Receiver for audit events.
///
/// A sink may be called from many request threads at once and must handle
/// that itself. No ordering between events is promised.
///
/// Any `Fn(&AuditEvent) + Send + Sync` closure is a sink.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use resource_gate::audit::{AuditEvent, AuditOutcome, AuditSink};
///
/// let rejected = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&rejected);
/// let sink = move |_: &AuditEvent| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// };
///
/// sink.record(&AuditEvent::new("req-1", "templates", AuditOutcome::NotAllowed));
/// assert_eq!(rejected.load(Ordering::Relaxed), 1);
/// ```
pub trait AuditSink: Send + Sync {
    /// Handles one event.
    fn record(&self, event: &AuditEvent);
}

impl<F> AuditSink for F
where
    F: Fn(&AuditEvent) + Send + Sync,
{
    fn record(&self, event: &AuditEvent) {
        self(event)
    }
}

/// Sink that emits each event as a structured `tracing` warning.
///
/// Events go to the `resource_audit` target so a subscriber can route them to
/// a security log separately from application output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl TracingAudit {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAudit {
    fn record(&self, event: &AuditEvent) {
        tracing::warn!(
            target: "resource_audit",
            request_id = %event.request_id(),
            scope = %event.scope(),
            outcome = %event.outcome(),
            key = %event.key().unwrap_or_default(),
            key_len = event.key_len().unwrap_or_default(),
            resource = %event.resource().unwrap_or_default(),
            principal = %event.principal().unwrap_or_default(),
            "resource request refused"
        );
    }
}
