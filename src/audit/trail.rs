//! In-memory audit event recorder.

use std::sync::{Mutex, MutexGuard};

use super::{AuditEvent, AuditSink};

/// In-memory recorder for audit events.
///
/// Safe to share between threads; recording takes a short lock. Intended for
/// tests and demos. Production deployments would forward to a persistent
/// security log instead.
///
/// # Example
///
/// ```
/// use resource_gate::audit::{AuditEvent, AuditOutcome, AuditSink, AuditTrail};
///
/// let trail = AuditTrail::new();
/// trail.record(&AuditEvent::new("req-123", "templates", AuditOutcome::NotAllowed));
///
/// assert_eq!(trail.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events, in arrival order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AuditSink for AuditTrail {
    fn record(&self, event: &AuditEvent) {
        self.lock().push(event.clone());
    }
}
