// Identifier service for new dictionaries
// Stands in for the id a backend would assign when a dictionary is created

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use uuid::Uuid;

/// Produces a fresh identifier for each new dictionary
///
/// Implementations must never return an id that is already in use; the store
/// still rejects a collision with `DictionaryError::DuplicateDictionaryId`.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Hands out a scripted list of ids, then `id-1`, `id-2`, ... once the list runs out
///
/// Useful wherever ids must be predictable, such as tests and demos.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    scripted: Mutex<VecDeque<String>>,
    counter: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scripted: Mutex::new(ids.into_iter().map(Into::into).collect()),
            counter: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        if let Some(id) = self.scripted.lock().pop_front() {
            return id;
        }
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{}", n)
    }
}

#[cfg(test)]
#[path = "id_service_test.rs"]
mod tests;
