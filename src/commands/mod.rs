// Command layer for the UI
// Wraps the store behind a lock, reports failures to the notification sink and
// emits dictionary_updated events on success

pub mod dictionary;

pub use dictionary::DictionaryCommands;
