mod common;

use accnotes_core::{
    encode_notes, LoadError, LoadStatus, MemoryKeyValueStore, Note, NoteStore, NoteStoreError,
    NOTES_STORAGE_KEY,
};
use common::FlakyStore;

fn reload(raw: Option<&str>) -> Vec<Note> {
    let storage = match raw {
        Some(value) => MemoryKeyValueStore::with_entry(NOTES_STORAGE_KEY, value),
        None => MemoryKeyValueStore::new(),
    };
    let mut store = NoteStore::new(storage);
    store.load();
    store.notes().to_vec()
}

#[test]
fn add_to_empty_storage_persists_single_element_list() {
    let mut store = NoteStore::new(MemoryKeyValueStore::new());
    assert_eq!(store.load(), LoadStatus::Missing);

    store.add("Test Note", "This is a test note").unwrap();

    assert_eq!(
        store.storage().peek(NOTES_STORAGE_KEY),
        Some(r#"[{"title":"Test Note","text":"This is a test note"}]"#)
    );
    assert_eq!(store.notes(), &[Note::new("Test Note", "This is a test note")]);
}

#[test]
fn mixed_mutations_match_what_load_reconstructs() {
    let mut store = NoteStore::new(MemoryKeyValueStore::new());
    store.load();
    store.add("a", "1").unwrap();
    store.add("b", "2").unwrap();
    store.add("c", "3").unwrap();
    store.edit(1, "B", "two").unwrap();
    store.delete(0).unwrap();
    store.add("", "").unwrap();

    let persisted = store.storage().peek(NOTES_STORAGE_KEY);
    assert_eq!(reload(persisted), store.notes());
    assert_eq!(
        store.notes(),
        &[Note::new("B", "two"), Note::new("c", "3"), Note::new("", "")]
    );
}

#[test]
fn delete_shifts_later_notes_down() {
    let mut store = NoteStore::new(MemoryKeyValueStore::new());
    store.add("first", "").unwrap();
    store.add("second", "").unwrap();

    store.delete(0).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].title, "second");
}

#[test]
fn load_restores_persisted_list_in_order() {
    let raw = encode_notes(&[Note::new("x", "1"), Note::new("y", "2")]).unwrap();
    let mut store = NoteStore::new(MemoryKeyValueStore::with_entry(NOTES_STORAGE_KEY, raw));
    assert_eq!(store.load(), LoadStatus::Restored { count: 2 });
    assert_eq!(store.notes()[1], Note::new("y", "2"));
}

#[test]
fn empty_list_round_trips() {
    assert!(reload(Some("[]")).is_empty());
    assert!(reload(None).is_empty());
}

#[test]
fn malformed_storage_recovers_as_empty_list() {
    let mut store = NoteStore::new(MemoryKeyValueStore::with_entry(NOTES_STORAGE_KEY, "{oops"));
    assert_eq!(store.load(), LoadStatus::Recovered);
    assert!(store.is_empty());

    assert!(matches!(store.try_load(), Err(LoadError::Malformed(_))));
}

#[test]
fn unreadable_storage_recovers_as_empty_list() {
    let mut flaky = FlakyStore::seeded(NOTES_STORAGE_KEY, r#"[{"title":"a","text":"b"}]"#);
    flaky.fail_reads = true;
    let mut store = NoteStore::new(flaky);

    assert_eq!(store.load(), LoadStatus::Recovered);
    assert!(store.is_empty());
    assert!(matches!(store.try_load(), Err(LoadError::Storage(_))));
}

#[test]
fn failed_add_keeps_note_in_memory_and_next_add_persists_both() {
    let mut store = NoteStore::new(FlakyStore::new());
    store.load();

    store.storage_mut().fail_writes = true;
    let err = store.add("kept", "in memory").unwrap_err();
    assert!(matches!(err, NoteStoreError::Save(_)));
    assert!(err.is_durability_gap());
    assert_eq!(store.len(), 1);
    assert_eq!(store.storage().stored(NOTES_STORAGE_KEY), None);

    store.storage_mut().fail_writes = false;
    store.add("second", "").unwrap();
    assert_eq!(
        store.storage().stored(NOTES_STORAGE_KEY),
        Some(r#"[{"title":"kept","text":"in memory"},{"title":"second","text":""}]"#)
    );
}

#[test]
fn failed_delete_is_not_rolled_back() {
    let mut store = NoteStore::new(FlakyStore::new());
    store.add("a", "").unwrap();
    store.add("b", "").unwrap();

    store.storage_mut().fail_writes = true;
    assert!(matches!(store.delete(0), Err(NoteStoreError::Save(_))));
    assert_eq!(store.notes(), &[Note::new("b", "")]);
    assert_eq!(
        store.storage().stored(NOTES_STORAGE_KEY),
        Some(r#"[{"title":"a","text":""},{"title":"b","text":""}]"#)
    );
}

#[test]
fn invalid_index_fails_without_touching_storage() {
    let mut store = NoteStore::new(FlakyStore::new());
    store.add("only", "").unwrap();
    let attempts = store.storage().write_attempts;

    assert!(matches!(
        store.edit(1, "x", "y"),
        Err(NoteStoreError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(matches!(
        store.delete(5),
        Err(NoteStoreError::IndexOutOfRange { index: 5, len: 1 })
    ));
    assert_eq!(store.storage().write_attempts, attempts);
    assert_eq!(store.notes(), &[Note::new("only", "")]);
}

#[test]
fn search_is_case_insensitive_over_title_or_text() {
    let mut store = NoteStore::new(MemoryKeyValueStore::new());
    store.add("Groceries", "milk").unwrap();

    assert_eq!(store.search("GRO").to_notes(), store.notes());
    assert_eq!(store.search("milk").to_notes(), store.notes());
    assert_eq!(store.search("xyz").iter().count(), 0);
}

#[test]
fn empty_search_returns_everything_and_never_writes() {
    let mut store = NoteStore::new(FlakyStore::new());
    store.add("one", "").unwrap();
    store.add("two", "").unwrap();
    let attempts = store.storage().write_attempts;

    let titles: Vec<&str> = store
        .search("")
        .iter()
        .map(|hit| hit.note.title.as_str())
        .collect();
    assert_eq!(titles, vec!["one", "two"]);
    assert_eq!(store.storage().write_attempts, attempts);
}

#[test]
fn failed_edit_is_not_rolled_back() {
    let mut store = NoteStore::new(FlakyStore::new());
    store.add("a", "1").unwrap();
    store.add("b", "2").unwrap();

    store.storage_mut().fail_writes = true;
    let err = store.edit(0, "A", "one").unwrap_err();
    assert!(matches!(err, NoteStoreError::Save(_)));
    assert!(err.is_durability_gap());

    assert_eq!(store.notes(), &[Note::new("A", "one"), Note::new("b", "2")]);
    assert_eq!(
        store.storage().stored(NOTES_STORAGE_KEY),
        Some(r#"[{"title":"a","text":"1"},{"title":"b","text":"2"}]"#)
    );
}
