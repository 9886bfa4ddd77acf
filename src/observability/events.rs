//! Observable events for reviewhub
//!
//! Events are explicit and typed; each maps to a stable name.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Store
    /// Data directory initialized
    StoreInitialized,
    /// Review collection loaded
    StoreLoaded,
    /// Review collection saved
    StoreSaved,
    /// Stored data failed verification
    StoreCorruption,

    // Queries
    /// Filtered list produced
    QueryExecuted,
    /// Stats computed
    StatsComputed,
    /// Trend computed
    TrendComputed,
    /// Lookup by id failed
    ReviewNotFound,

    // Responses
    /// Response attached to a review
    ReviewResponded,
    /// Response refused by the engine
    ResponseRejected,

    // Ingestion
    /// Incoming reviews merged
    ReviewsSynced,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreSaved => "STORE_SAVED",
            Event::StoreCorruption => "STORE_CORRUPTION",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::StatsComputed => "STATS_COMPUTED",
            Event::TrendComputed => "TREND_COMPUTED",
            Event::ReviewNotFound => "REVIEW_NOT_FOUND",
            Event::ReviewResponded => "REVIEW_RESPONDED",
            Event::ResponseRejected => "RESPONSE_REJECTED",
            Event::ReviewsSynced => "REVIEWS_SYNCED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreCorruption => Severity::Error,
            Event::ReviewNotFound | Event::ResponseRejected => Severity::Warn,
            Event::StoreLoaded | Event::QueryExecuted | Event::StatsComputed | Event::TrendComputed => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [
            Event::ConfigLoaded,
            Event::StoreCorruption,
            Event::ReviewResponded,
            Event::ReviewsSynced,
        ] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::StoreCorruption.severity(), Severity::Error);
        assert_eq!(Event::ResponseRejected.severity(), Severity::Warn);
        assert_eq!(Event::ReviewResponded.severity(), Severity::Info);
        assert_eq!(Event::QueryExecuted.severity(), Severity::Trace);
    }
}
