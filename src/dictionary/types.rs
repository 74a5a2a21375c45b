// Dictionary data model
// Field names serialize in camelCase so the state can be handed to the UI as-is

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Row map keyed by `from` text, in insertion order
pub type RowMap = IndexMap<String, String>;

/// A named collection of from→to text-replacement rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    /// Unique identifier, assigned by the identifier service
    pub id: String,
    /// Unique, user-given name
    pub name: String,
    /// Rows keyed by `from`
    #[serde(default)]
    pub row_map: RowMap,
}

impl Dictionary {
    /// Create a dictionary with no rows
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            row_map: RowMap::new(),
        }
    }

    /// Look up the `to` text for a row
    pub fn row(&self, from: &str) -> Option<&str> {
        self.row_map.get(from).map(String::as_str)
    }

    pub fn has_row(&self, from: &str) -> bool {
        self.row_map.contains_key(from)
    }

    /// Iterate rows as `(from, to)` pairs in row order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.row_map.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn row_count(&self) -> usize {
        self.row_map.len()
    }
}

/// Ordered list of dictionaries held by the store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryListState {
    pub dictionary_list: Vec<Dictionary>,
}

impl DictionaryListState {
    /// Position of the dictionary with this id (linear scan)
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.dictionary_list
            .iter()
            .position(|dictionary| dictionary.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Dictionary> {
        self.dictionary_list
            .iter()
            .find(|dictionary| dictionary.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Dictionary> {
        self.dictionary_list
            .iter()
            .find(|dictionary| dictionary.name == name)
    }

    pub fn len(&self) -> usize {
        self.dictionary_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary_list.is_empty()
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
