// Dictionary commands for CRUD operations
// Exposes DictionaryStore to the UI layer and emits dictionary_updated events on mutations

use std::sync::Arc;

use parking_lot::Mutex;

use crate::dictionary::{
    CreateDictionary, CreateDictionaryRow, DeleteDictionary, DeleteDictionaryRow, Dictionary,
    DictionaryError, DictionaryStore, ExpansionResult, RowExpander, UpdateDictionaryRow,
};
use crate::events::dictionary_events::{actions, DictionaryUpdatedPayload};
use crate::events::DictionaryEventEmitter;
use crate::notification::NotificationSink;
use crate::util::{Config, ExpansionConfig};

/// Commands the UI calls into
///
/// Each command holds the store lock for the whole action and mutation, so
/// concurrent callers never observe a half-applied operation. Errors come back
/// as user-facing strings and are also posted to the notification sink.
pub struct DictionaryCommands {
    store: Mutex<DictionaryStore>,
    emitter: Arc<dyn DictionaryEventEmitter>,
    notifications: Arc<dyn NotificationSink>,
    expansion: ExpansionConfig,
}

impl DictionaryCommands {
    pub fn new(
        store: DictionaryStore,
        emitter: Arc<dyn DictionaryEventEmitter>,
        notifications: Arc<dyn NotificationSink>,
        config: &Config,
    ) -> Self {
        Self {
            store: Mutex::new(store),
            emitter,
            notifications,
            expansion: config.expansion,
        }
    }

    /// Run a read-only closure against the store
    pub fn with_store<R>(&self, f: impl FnOnce(&DictionaryStore) -> R) -> R {
        let store = self.store.lock();
        f(&*store)
    }

    /// List all dictionaries
    pub fn list_dictionaries(&self) -> Vec<Dictionary> {
        self.store.lock().list().to_vec()
    }

    /// Create a new dictionary
    ///
    /// # Returns
    /// The newly created Dictionary with its generated ID
    pub fn create_dictionary(&self, name: &str) -> Result<Dictionary, String> {
        let result = CreateDictionary::new(name)
            .and_then(|request| self.store.lock().create_dictionary(request));

        let dictionary = result.map_err(|e| self.reject("create dictionary", e))?;

        self.emit(actions::CREATE_DICTIONARY, &dictionary.id, None);
        crate::info!("Created dictionary: {} ({})", dictionary.name, dictionary.id);
        Ok(dictionary)
    }

    /// Add a row to a dictionary
    pub fn create_dictionary_row(&self, id: &str, from: &str, to: &str) -> Result<(), String> {
        CreateDictionaryRow::new(id, from, to)
            .and_then(|request| self.store.lock().create_dictionary_row(request))
            .map_err(|e| self.reject("create row", e))?;

        self.emit(actions::CREATE_ROW, id, Some(from));
        crate::info!("Added row to dictionary {}: {} -> {}", id, from, to);
        Ok(())
    }

    /// Update the row at `prev_from` to `from -> to`
    pub fn update_dictionary_row(
        &self,
        id: &str,
        prev_from: &str,
        from: &str,
        to: &str,
    ) -> Result<(), String> {
        UpdateDictionaryRow::new(id, prev_from, from, to)
            .and_then(|request| self.store.lock().update_dictionary_row(request))
            .map_err(|e| self.reject("update row", e))?;

        self.emit(actions::UPDATE_ROW, id, Some(from));
        crate::info!("Updated row in dictionary {}: {} -> {}", id, prev_from, from);
        Ok(())
    }

    /// Delete the row at `from`
    pub fn delete_dictionary_row(&self, id: &str, from: &str) -> Result<(), String> {
        DeleteDictionaryRow::new(id, from)
            .and_then(|request| self.store.lock().delete_dictionary_row(request))
            .map_err(|e| self.reject("delete row", e))?;

        self.emit(actions::DELETE_ROW, id, Some(from));
        crate::info!("Deleted row from dictionary {}: {}", id, from);
        Ok(())
    }

    /// Delete a dictionary and all of its rows
    pub fn delete_dictionary(&self, id: &str) -> Result<(), String> {
        DeleteDictionary::new(id)
            .and_then(|request| self.store.lock().delete_dictionary(request))
            .map_err(|e| self.reject("delete dictionary", e))?;

        self.emit(actions::DELETE_DICTIONARY, id, None);
        crate::info!("Deleted dictionary: {}", id);
        Ok(())
    }

    /// Apply a dictionary's rows to text
    pub fn expand(&self, id: &str, text: &str) -> Result<ExpansionResult, String> {
        // The lock is released before rejecting, so the sink may call back in
        let expander = self
            .with_store(|store| {
                store
                    .get(id)
                    .map(|dictionary| RowExpander::new(dictionary, &self.expansion))
            })
            .ok_or(DictionaryError::InvalidDictionaryId)
            .map_err(|e| self.reject("expand text", e))?;

        Ok(expander.expand(text))
    }

    fn emit(&self, action: &str, dictionary_id: &str, row_from: Option<&str>) {
        self.emitter
            .emit_dictionary_updated(DictionaryUpdatedPayload::new(action, dictionary_id, row_from));
    }

    /// Log the failure, post it to the notification sink and return its message
    fn reject(&self, operation: &str, error: DictionaryError) -> String {
        let message = error.to_string();
        crate::warn!("Failed to {}: {} ({})", operation, message, error.kind());
        self.notifications.notify(&message);
        message
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
