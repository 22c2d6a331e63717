//! Platform event envelopes and audit entries.

pub mod audit;
pub mod event;

pub use audit::AuditEvent;
pub use event::{is_known_event_type, PlatformEvent, KNOWN_EVENT_TYPES};
