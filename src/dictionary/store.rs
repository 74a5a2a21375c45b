// Dictionary store - in-memory list of dictionaries and their rows
//
// Every operation is an action/mutation pair: the action validates against the
// current state (and for creation asks the identifier service for an id), then
// commits a Mutation. `commit` can also be called directly, so each mutation
// re-validates before touching state. Validation always precedes mutation, so a
// failed operation leaves the state unchanged.

use std::fmt;

use super::id_service::{IdGenerator, UuidGenerator};
use super::request::{
    CreateDictionary, CreateDictionaryRow, DeleteDictionary, DeleteDictionaryRow, Mutation,
    UpdateDictionaryRow,
};
use super::{Dictionary, DictionaryError, DictionaryListState};

/// Store for dictionaries with validated create/update/delete operations
pub struct DictionaryStore {
    state: DictionaryListState,
    id_generator: Box<dyn IdGenerator>,
}

impl fmt::Debug for DictionaryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryStore {
    /// Create an empty store that assigns UUID v4 ids
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    /// Create an empty store backed by the given identifier service
    pub fn with_id_generator(id_generator: impl IdGenerator + 'static) -> Self {
        Self {
            state: DictionaryListState::default(),
            id_generator: Box::new(id_generator),
        }
    }

    /// Borrow the whole state, e.g. to serialize it for the UI
    pub fn state(&self) -> &DictionaryListState {
        &self.state
    }

    /// List all dictionaries in creation order
    pub fn list(&self) -> &[Dictionary] {
        &self.state.dictionary_list
    }

    /// Get a dictionary by id
    pub fn get(&self, id: &str) -> Option<&Dictionary> {
        self.state.find(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Dictionary> {
        self.state.find_by_name(name)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    // --- actions ---

    /// Create a dictionary with an id from the identifier service
    ///
    /// Returns the new dictionary.
    #[must_use = "this returns a Result that should be handled"]
    pub fn create_dictionary(
        &mut self,
        request: CreateDictionary,
    ) -> Result<Dictionary, DictionaryError> {
        self.check_name_available(&request.name)?;

        let id = self.id_generator.generate();
        crate::debug!("Assigned id {} to dictionary '{}'", id, request.name);

        self.commit_create_dictionary(id, request).cloned()
    }

    /// Add a row to a dictionary
    #[must_use = "this returns a Result that should be handled"]
    pub fn create_dictionary_row(
        &mut self,
        request: CreateDictionaryRow,
    ) -> Result<(), DictionaryError> {
        self.check_row_consistency(&request.id, &request.from, false)?;
        self.commit(Mutation::CreateDictionaryRow(request))
    }

    /// Replace a row, optionally renaming its `from`
    #[must_use = "this returns a Result that should be handled"]
    pub fn update_dictionary_row(
        &mut self,
        request: UpdateDictionaryRow,
    ) -> Result<(), DictionaryError> {
        self.check_row_consistency(&request.id, &request.from, request.keeps_key())?;
        self.commit(Mutation::UpdateDictionaryRow(request))
    }

    /// Remove a row from a dictionary
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete_dictionary_row(
        &mut self,
        request: DeleteDictionaryRow,
    ) -> Result<(), DictionaryError> {
        self.commit(Mutation::DeleteDictionaryRow(request))
    }

    /// Remove a dictionary together with all of its rows
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete_dictionary(&mut self, request: DeleteDictionary) -> Result<(), DictionaryError> {
        self.commit(Mutation::DeleteDictionary(request))
    }

    // --- mutations ---

    /// Validate a mutation against the current state and apply it
    #[must_use = "this returns a Result that should be handled"]
    pub fn commit(&mut self, mutation: Mutation) -> Result<(), DictionaryError> {
        match mutation {
            Mutation::CreateDictionary { id, request } => {
                self.commit_create_dictionary(id, request).map(|_| ())
            }
            Mutation::CreateDictionaryRow(request) => self.commit_create_row(request),
            Mutation::UpdateDictionaryRow(request) => self.commit_update_row(request),
            Mutation::DeleteDictionaryRow(request) => self.commit_delete_row(request),
            Mutation::DeleteDictionary(request) => self.commit_delete_dictionary(request),
        }
    }

    fn commit_create_dictionary(
        &mut self,
        id: String,
        request: CreateDictionary,
    ) -> Result<&Dictionary, DictionaryError> {
        if id.is_empty() {
            return Err(DictionaryError::EmptyDictionaryId);
        }
        self.check_name_available(&request.name)?;
        if self.state.index_of(&id).is_some() {
            return Err(DictionaryError::DuplicateDictionaryId);
        }

        let index = self.state.dictionary_list.len();
        self.state
            .dictionary_list
            .push(Dictionary::new(id, request.name));

        let dictionary = &self.state.dictionary_list[index];
        crate::debug!("Created dictionary '{}' ({})", dictionary.name, dictionary.id);
        Ok(dictionary)
    }

    fn commit_create_row(&mut self, request: CreateDictionaryRow) -> Result<(), DictionaryError> {
        let index = self.check_row_consistency(&request.id, &request.from, false)?;

        crate::debug!("Adding row '{}' to dictionary {}", request.from, request.id);
        self.state.dictionary_list[index]
            .row_map
            .insert(request.from, request.to);
        Ok(())
    }

    fn commit_update_row(&mut self, request: UpdateDictionaryRow) -> Result<(), DictionaryError> {
        let index = self.check_row_consistency(&request.id, &request.from, request.keeps_key())?;

        let row_map = &mut self.state.dictionary_list[index].row_map;
        if !row_map.contains_key(&request.prev_from) {
            return Err(DictionaryError::InvalidDictionaryRowId);
        }

        if !request.keeps_key() {
            // Renamed rows move to the end, like a fresh insert
            row_map.shift_remove(&request.prev_from);
        }

        crate::debug!(
            "Updating row '{}' -> '{}' in dictionary {}",
            request.prev_from,
            request.from,
            request.id
        );
        row_map.insert(request.from, request.to);
        Ok(())
    }

    fn commit_delete_row(&mut self, request: DeleteDictionaryRow) -> Result<(), DictionaryError> {
        let index = self.index_of(&request.id)?;

        self.state.dictionary_list[index]
            .row_map
            .shift_remove(&request.from)
            .ok_or(DictionaryError::InvalidDictionaryRowId)?;

        crate::debug!("Deleted row '{}' from dictionary {}", request.from, request.id);
        Ok(())
    }

    fn commit_delete_dictionary(&mut self, request: DeleteDictionary) -> Result<(), DictionaryError> {
        let index = self.index_of(&request.id)?;
        let removed = self.state.dictionary_list.remove(index);

        crate::debug!(
            "Deleted dictionary '{}' ({}) with {} rows",
            removed.name,
            removed.id,
            removed.row_count()
        );
        Ok(())
    }

    // --- consistency checks ---

    fn index_of(&self, id: &str) -> Result<usize, DictionaryError> {
        self.state
            .index_of(id)
            .ok_or(DictionaryError::InvalidDictionaryId)
    }

    fn check_name_available(&self, name: &str) -> Result<(), DictionaryError> {
        if name.is_empty() {
            return Err(DictionaryError::EmptyDictionaryName);
        }
        if self.state.find_by_name(name).is_some() {
            return Err(DictionaryError::DuplicateDictionaryName);
        }
        Ok(())
    }

    /// Check the target dictionary exists and `from` doesn't collide with a row
    ///
    /// Updates that keep the row's key pass `exclude_itself`, so the row being
    /// edited doesn't count as its own duplicate.
    fn check_row_consistency(
        &self,
        id: &str,
        from: &str,
        exclude_itself: bool,
    ) -> Result<usize, DictionaryError> {
        let index = self.index_of(id)?;

        if !exclude_itself && self.state.dictionary_list[index].has_row(from) {
            return Err(DictionaryError::DuplicateRowData);
        }
        Ok(index)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
