// Dictionary manager core: an in-memory store of named from→to text-replacement
// dictionaries, with the command layer, events and notifications a UI needs.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod commands;
pub mod dictionary;
pub mod events;
pub mod notification;
pub mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use commands::DictionaryCommands;
pub use dictionary::{
    CreateDictionary, CreateDictionaryRow, DeleteDictionary, DeleteDictionaryRow, Dictionary,
    DictionaryError, DictionaryListState, DictionaryStore, IdGenerator, Mutation, RowExpander,
    UpdateDictionaryRow, UuidGenerator,
};
pub use events::{DictionaryEventEmitter, NoopEventEmitter};
pub use notification::{NotificationSink, NotificationSlot};
pub use util::{Config, ConfigError};
