//! Audit support for rejected resource lookups.
//!
//! This module provides:
//! - `AuditEvent`: what a security monitor needs to know about a rejection
//! - `AuditSink`: the callback a [`ResourceGate`](crate::ResourceGate) invokes
//! - `TracingAudit`: a sink that emits structured `tracing` events
//! - `AuditTrail`: an in-memory, thread-safe recorder
//!
//! The rejected key is the one piece of detail that must never reach the
//! requester, so it travels only through this module. Keys are escaped and
//! truncated before they are stored.

mod event;
mod sink;
mod trail;

pub use event::{AuditEvent, AuditOutcome, MAX_AUDIT_KEY_CHARS};
pub use sink::{AuditSink, TracingAudit};
pub use trail::AuditTrail;
