// Tests for dictionary commands
// Test cases:
// - Successful commands emit one dictionary_updated event each, with the right action
// - Failed commands post the error message to the notification sink and emit nothing
// - Expansion uses the dictionary's rows and the configured options

use super::*;
use crate::dictionary::SequenceIdGenerator;
use crate::events::tests::MockEventEmitter;
use crate::notification::NotificationSlot;

struct Harness {
    commands: DictionaryCommands,
    emitter: Arc<MockEventEmitter>,
    slot: Arc<NotificationSlot>,
}

fn harness_with_config(config: &Config) -> Harness {
    let emitter = Arc::new(MockEventEmitter::new());
    let slot = Arc::new(NotificationSlot::new());
    let store = DictionaryStore::with_id_generator(SequenceIdGenerator::new(["abc", "def"]));
    let commands = DictionaryCommands::new(store, emitter.clone(), slot.clone(), config);
    Harness {
        commands,
        emitter,
        slot,
    }
}

fn harness() -> Harness {
    harness_with_config(&Config::default())
}

fn recorded_actions(emitter: &MockEventEmitter) -> Vec<String> {
    emitter
        .dictionary_updated_events
        .lock()
        .unwrap()
        .iter()
        .map(|e| e.action.clone())
        .collect()
}

#[test]
fn test_end_to_end_emits_events() {
    let h = harness();

    let colors = h.commands.create_dictionary("Colors").unwrap();
    assert_eq!(colors.id, "abc");

    h.commands.create_dictionary_row("abc", "red", "rouge").unwrap();
    h.commands
        .update_dictionary_row("abc", "red", "crimson", "rouge")
        .unwrap();
    assert_eq!(
        h.commands.with_store(|s| s.get("abc").and_then(|d| d.row("crimson")).map(String::from)),
        Some("rouge".to_string())
    );

    h.commands.delete_dictionary_row("abc", "crimson").unwrap();
    h.commands.delete_dictionary("abc").unwrap();

    assert!(h.commands.list_dictionaries().is_empty());
    assert_eq!(
        recorded_actions(&h.emitter),
        vec![
            actions::CREATE_DICTIONARY,
            actions::CREATE_ROW,
            actions::UPDATE_ROW,
            actions::DELETE_ROW,
            actions::DELETE_DICTIONARY,
        ]
    );

    let events = h.emitter.dictionary_updated_events.lock().unwrap();
    assert_eq!(events[2].row_from.as_deref(), Some("crimson"));
    assert!(events.iter().all(|e| e.dictionary_id == "abc"));
}

#[test]
fn test_failure_is_posted_to_notification_sink() {
    let h = harness();
    h.commands.create_dictionary("Colors").unwrap();

    let result = h.commands.create_dictionary("Colors");

    assert_eq!(result, Err("Duplicate dictionary name".to_string()));
    assert!(h.slot.tick());
    assert_eq!(h.slot.current(), "Duplicate dictionary name");
    assert_eq!(recorded_actions(&h.emitter), vec![actions::CREATE_DICTIONARY]);
}

#[test]
fn test_empty_input_is_rejected_before_store() {
    let h = harness();

    assert_eq!(
        h.commands.create_dictionary(""),
        Err("Dictionary name can't be empty".to_string())
    );
    assert_eq!(
        h.commands.create_dictionary_row("abc", "", "rouge"),
        Err(DictionaryError::InvalidRowData.to_string())
    );
    assert_eq!(
        h.commands.delete_dictionary_row("", "red"),
        Err(DictionaryError::InvalidDictionaryId.to_string())
    );
    assert_eq!(
        h.commands.delete_dictionary(""),
        Err(DictionaryError::InvalidDictionaryId.to_string())
    );
    assert!(recorded_actions(&h.emitter).is_empty());
}

#[test]
fn test_duplicate_row_keeps_original_and_notifies() {
    let h = harness();
    h.commands.create_dictionary("Colors").unwrap();
    h.commands.create_dictionary_row("abc", "red", "rouge").unwrap();

    let result = h.commands.create_dictionary_row("abc", "red", "rot");

    assert_eq!(result, Err(DictionaryError::DuplicateRowData.to_string()));
    h.slot.tick();
    assert_eq!(h.slot.current(), "There is row with duplicate 'From'");
    assert_eq!(
        h.commands.with_store(|s| s.get("abc").and_then(|d| d.row("red")).map(String::from)),
        Some("rouge".to_string())
    );
}

#[test]
fn test_expand_uses_dictionary_rows() {
    let h = harness();
    h.commands.create_dictionary("Colors").unwrap();
    h.commands.create_dictionary_row("abc", "red", "rouge").unwrap();

    let result = h.commands.expand("abc", "Red sky, red sea").unwrap();

    assert_eq!(result.expanded_text, "rouge sky, rouge sea");
    assert_eq!(result.replacements, 2);
}

#[test]
fn test_expand_respects_config() {
    let config = Config::from_json(r#"{"expansion":{"caseInsensitive":false}}"#).unwrap();
    let h = harness_with_config(&config);
    h.commands.create_dictionary("Colors").unwrap();
    h.commands.create_dictionary_row("abc", "red", "rouge").unwrap();

    let result = h.commands.expand("abc", "Red sky, red sea").unwrap();

    assert_eq!(result.expanded_text, "Red sky, rouge sea");
}

#[test]
fn test_expand_unknown_dictionary_fails() {
    let h = harness();

    let result = h.commands.expand("nope", "text");

    assert_eq!(result, Err(DictionaryError::InvalidDictionaryId.to_string()));
    h.slot.tick();
    assert_eq!(h.slot.current(), "Can't find dictionary by id");
}

/// Sink that reads the store again from inside `notify`
#[derive(Default)]
struct ReentrantSink {
    commands: Mutex<Option<std::sync::Weak<DictionaryCommands>>>,
    seen_counts: Mutex<Vec<usize>>,
}

impl NotificationSink for ReentrantSink {
    fn notify(&self, _message: &str) {
        let commands = self.commands.lock().as_ref().and_then(|weak| weak.upgrade());
        if let Some(commands) = commands {
            let count = commands.list_dictionaries().len();
            self.seen_counts.lock().push(count);
        }
    }
}

#[test]
fn test_sink_can_call_back_into_commands_on_failure() {
    let sink = Arc::new(ReentrantSink::default());
    let store = DictionaryStore::with_id_generator(SequenceIdGenerator::new(["abc"]));
    let commands = Arc::new(DictionaryCommands::new(
        store,
        Arc::new(MockEventEmitter::new()),
        sink.clone(),
        &Config::default(),
    ));
    *sink.commands.lock() = Some(Arc::downgrade(&commands));

    commands.create_dictionary("Colors").unwrap();

    assert!(commands.expand("nope", "text").is_err());
    assert!(commands.create_dictionary("Colors").is_err());
    assert!(commands.create_dictionary_row("abc", "red", "rouge").is_ok());
    assert!(commands.create_dictionary_row("abc", "red", "rot").is_err());

    assert_eq!(*sink.seen_counts.lock(), vec![1, 1, 1]);
}
