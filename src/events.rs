// Dictionary events for UI notification
// Defines event payloads and emission trait for testability

/// Dictionary-related event names
pub mod dictionary_events {
    pub const DICTIONARY_UPDATED: &str = "dictionary_updated";

    /// Values of `DictionaryUpdatedPayload::action`
    pub mod actions {
        pub const CREATE_DICTIONARY: &str = "create_dictionary";
        pub const DELETE_DICTIONARY: &str = "delete_dictionary";
        pub const CREATE_ROW: &str = "create_row";
        pub const UPDATE_ROW: &str = "update_row";
        pub const DELETE_ROW: &str = "delete_row";
    }

    /// Payload for dictionary_updated event
    #[derive(Debug, Clone, serde::Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct DictionaryUpdatedPayload {
        /// Type of mutation, one of the `actions` constants
        pub action: String,
        /// ID of the affected dictionary
        pub dictionary_id: String,
        /// `from` of the affected row, for row mutations
        #[serde(skip_serializing_if = "Option::is_none")]
        pub row_from: Option<String>,
        /// ISO 8601 timestamp of the mutation
        pub timestamp: String,
    }

    impl DictionaryUpdatedPayload {
        /// Build a payload stamped with the current time
        pub fn new(action: &str, dictionary_id: &str, row_from: Option<&str>) -> Self {
            Self {
                action: action.to_string(),
                dictionary_id: dictionary_id.to_string(),
                row_from: row_from.map(str::to_string),
                timestamp: super::current_timestamp(),
            }
        }
    }
}

/// Get current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Trait for emitting dictionary events
/// Allows mocking in tests while the embedding UI supplies the real sink
pub trait DictionaryEventEmitter: Send + Sync {
    /// Emit dictionary_updated event
    fn emit_dictionary_updated(&self, payload: dictionary_events::DictionaryUpdatedPayload);
}

/// Emitter that drops every event, for hosts that don't listen
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventEmitter;

impl DictionaryEventEmitter for NoopEventEmitter {
    fn emit_dictionary_updated(&self, _payload: dictionary_events::DictionaryUpdatedPayload) {}
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
