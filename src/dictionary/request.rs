// Typed requests for store operations
//
// Constructors run the checks that don't need store state (empty fields), so a
// request that exists is already well-formed. Checks against the current state
// run in the store, once in the action and again when the mutation commits.

use super::DictionaryError;

fn require(value: String, error: DictionaryError) -> Result<String, DictionaryError> {
    if value.is_empty() {
        Err(error)
    } else {
        Ok(value)
    }
}

/// Create a dictionary with the given name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDictionary {
    pub(crate) name: String,
}

impl CreateDictionary {
    pub fn new(name: impl Into<String>) -> Result<Self, DictionaryError> {
        Ok(Self {
            name: require(name.into(), DictionaryError::EmptyDictionaryName)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Add a row to an existing dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDictionaryRow {
    pub(crate) id: String,
    pub(crate) from: String,
    pub(crate) to: String,
}

impl CreateDictionaryRow {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, DictionaryError> {
        Ok(Self {
            id: require(id.into(), DictionaryError::InvalidRowData)?,
            from: require(from.into(), DictionaryError::InvalidRowData)?,
            to: require(to.into(), DictionaryError::InvalidRowData)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

/// Replace the row at `prev_from` with `from → to`
///
/// `prev_from` is not checked here: an empty or unknown value simply matches no
/// row and fails in the store with [`DictionaryError::InvalidDictionaryRowId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDictionaryRow {
    pub(crate) id: String,
    pub(crate) prev_from: String,
    pub(crate) from: String,
    pub(crate) to: String,
}

impl UpdateDictionaryRow {
    pub fn new(
        id: impl Into<String>,
        prev_from: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, DictionaryError> {
        Ok(Self {
            id: require(id.into(), DictionaryError::InvalidRowData)?,
            prev_from: prev_from.into(),
            from: require(from.into(), DictionaryError::InvalidRowData)?,
            to: require(to.into(), DictionaryError::InvalidRowData)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prev_from(&self) -> &str {
        &self.prev_from
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// True when the row keeps its key and only `to` changes
    pub fn keeps_key(&self) -> bool {
        self.from == self.prev_from
    }
}

/// Remove the row at `from`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDictionaryRow {
    pub(crate) id: String,
    pub(crate) from: String,
}

impl DeleteDictionaryRow {
    pub fn new(id: impl Into<String>, from: impl Into<String>) -> Result<Self, DictionaryError> {
        Ok(Self {
            id: require(id.into(), DictionaryError::InvalidDictionaryId)?,
            from: require(from.into(), DictionaryError::InvalidDictionaryRowId)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn from(&self) -> &str {
        &self.from
    }
}

/// Remove a dictionary and all of its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDictionary {
    pub(crate) id: String,
}

impl DeleteDictionary {
    pub fn new(id: impl Into<String>) -> Result<Self, DictionaryError> {
        Ok(Self {
            id: require(id.into(), DictionaryError::InvalidDictionaryId)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A state change ready to be committed to the store
///
/// Mutations can be committed directly with `DictionaryStore::commit`; the store
/// re-validates them against current state either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Append a dictionary with the id obtained from the identifier service
    CreateDictionary {
        id: String,
        request: CreateDictionary,
    },
    CreateDictionaryRow(CreateDictionaryRow),
    UpdateDictionaryRow(UpdateDictionaryRow),
    DeleteDictionaryRow(DeleteDictionaryRow),
    DeleteDictionary(DeleteDictionary),
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
