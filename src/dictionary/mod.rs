// Dictionary module - named from→to replacement dictionaries and the store that owns them

mod error;
mod expander;
mod id_service;
mod request;
mod store;
mod types;

pub use error::DictionaryError;
pub use expander::{ExpansionResult, RowExpander};
pub use id_service::{IdGenerator, SequenceIdGenerator, UuidGenerator};
pub use request::{
    CreateDictionary, CreateDictionaryRow, DeleteDictionary, DeleteDictionaryRow, Mutation,
    UpdateDictionaryRow,
};
pub use store::DictionaryStore;
pub use types::{Dictionary, DictionaryListState, RowMap};
