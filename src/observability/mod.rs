//! Observability for reviewhub
//!
//! Structured JSON logging of typed events. Observability is read-only:
//! logging never changes what an operation returns, and a failed write to
//! stderr is ignored.
//!
//! # Usage
//!
//! ```ignore
//! use reviewhub::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ReviewResponded, &[("review_id", "rev-002")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
