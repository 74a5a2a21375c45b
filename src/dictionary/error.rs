// Dictionary store errors
// Display strings are shown to the user verbatim, so they stay fixed

/// Error kinds raised by dictionary and row operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DictionaryError {
    /// Dictionary name is empty on create
    #[error("Dictionary name can't be empty")]
    EmptyDictionaryName,
    /// Dictionary id is empty when committing a new dictionary
    #[error("Dictionary id can't be empty")]
    EmptyDictionaryId,
    /// Another dictionary already uses this name
    #[error("Duplicate dictionary name")]
    DuplicateDictionaryName,
    /// The identifier service handed out an id that is already in use
    #[error("Duplicate dictionary id")]
    DuplicateDictionaryId,
    /// Dictionary id is empty or doesn't match any dictionary
    #[error("Can't find dictionary by id")]
    InvalidDictionaryId,
    /// Row id, `from` or `to` is empty
    #[error("Check 'From' and 'To' values. They should be not null")]
    InvalidRowData,
    /// Another row in the dictionary already uses this `from`
    #[error("There is row with duplicate 'From'")]
    DuplicateRowData,
    /// No row exists at the given `from`/`prevFrom`
    #[error("Can't find dictionary row by prevFrom")]
    InvalidDictionaryRowId,
}

impl DictionaryError {
    /// Stable name of the error kind, for matching without comparing messages
    pub fn kind(&self) -> &'static str {
        match self {
            DictionaryError::EmptyDictionaryName => "EmptyDictionaryName",
            DictionaryError::EmptyDictionaryId => "EmptyDictionaryId",
            DictionaryError::DuplicateDictionaryName => "DuplicateDictionaryName",
            DictionaryError::DuplicateDictionaryId => "DuplicateDictionaryId",
            DictionaryError::InvalidDictionaryId => "InvalidDictionaryId",
            DictionaryError::InvalidRowData => "InvalidRowData",
            DictionaryError::DuplicateRowData => "DuplicateRowData",
            DictionaryError::InvalidDictionaryRowId => "InvalidDictionaryRowId",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
