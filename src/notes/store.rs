//! NoteStore — in-memory note storage
//!
//! Owns the ordered collection of notes behind a single mutex. actix-web
//! dispatches requests across worker threads, so every operation holds the
//! lock for its full duration; there are no suspension points under the lock.

use std::sync::Mutex;

use chrono::Utc;

use super::id::note_id;
use crate::models::Note;

/// Failure modes surfaced by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No stored note matches the given id.
    NotFound,
    /// A freshly appended note could not be confirmed in the collection.
    StorageFault,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "note not found"),
            StoreError::StorageFault => write!(f, "note could not be stored"),
        }
    }
}

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Mutex<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
        }
    }

    /// Append a new note and return its generated id.
    ///
    /// Sets `created_at == updated_at`. The append is verified by re-scanning
    /// the collection for the new id; zero matches surfaces as `StorageFault`
    /// so the caller can report a 500.
    pub fn add(&self, title: &str, tags: &[String], body: &str) -> Result<String, StoreError> {
        let mut notes = self.notes.lock().unwrap();

        // Ids are random; regenerate in the unlikely case one collides.
        let mut id = note_id();
        while notes.iter().any(|n| n.id == id) {
            id = note_id();
        }

        let now = Utc::now();
        notes.push(Note {
            id: id.clone(),
            title: title.to_string(),
            tags: tags.to_vec(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        });

        if notes.iter().any(|n| n.id == id) {
            Ok(id)
        } else {
            Err(StoreError::StorageFault)
        }
    }

    /// Snapshot of all notes in insertion order.
    pub fn get_all(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    /// Find the first note with a matching id (exact string equality).
    pub fn get_by_id(&self, id: &str) -> Result<Note, StoreError> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Replace title/tags/body of an existing note and refresh `updated_at`.
    /// `id` and `created_at` are left untouched.
    pub fn edit_by_id(
        &self,
        id: &str,
        title: &str,
        tags: &[String],
        body: &str,
    ) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().unwrap();

        match notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.title = title.to_string();
                note.tags = tags.to_vec();
                note.body = body.to_string();
                note.updated_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Remove the note with the given id.
    pub fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().unwrap();

        match notes.iter().position(|n| n.id == id) {
            Some(index) => {
                notes.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Number of stored notes.
    pub fn count(&self) -> usize {
        self.notes.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_then_get_by_id() {
        let store = NoteStore::new();

        let id = store
            .add("Shopping", &tags(&["errand"]), "Buy milk")
            .expect("Failed to add note");

        let note = store.get_by_id(&id).expect("Note should exist");
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.tags, tags(&["errand"]));
        assert_eq!(note.body, "Buy milk");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = NoteStore::new();
        store.add("A", &[], "a").expect("Failed to add note");

        assert_eq!(store.get_by_id("no-such-id"), Err(StoreError::NotFound));
        assert_eq!(
            store.edit_by_id("no-such-id", "B", &[], "b"),
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete_by_id("no-such-id"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_edit_replaces_fields_and_preserves_identity() {
        let store = NoteStore::new();
        let id = store
            .add("Shopping", &tags(&["errand"]), "Buy milk")
            .expect("Failed to add note");
        let before = store.get_by_id(&id).unwrap();

        store
            .edit_by_id(&id, "Shopping v2", &tags(&["errand"]), "Buy milk and eggs")
            .expect("Failed to edit note");

        let after = store.get_by_id(&id).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.title, "Shopping v2");
        assert_eq!(after.body, "Buy milk and eggs");
        assert!(after.updated_at >= after.created_at);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = NoteStore::new();
        let keep = store.add("Keep", &[], "stays").expect("Failed to add note");
        let gone = store.add("Gone", &[], "goes").expect("Failed to add note");

        store.delete_by_id(&gone).expect("Failed to delete note");

        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_id(&gone), Err(StoreError::NotFound));
        assert!(store.get_by_id(&keep).is_ok());
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let store = NoteStore::new();
        for title in ["first", "second", "third"] {
            store.add(title, &[], "body").expect("Failed to add note");
        }

        let notes = store.get_all();
        assert_eq!(notes.len(), 3);
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_unique_across_notes() {
        let store = NoteStore::new();
        for i in 0..50 {
            store
                .add(&format!("note {}", i), &[], "body")
                .expect("Failed to add note");
        }

        let notes = store.get_all();
        let ids: std::collections::HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), notes.len());
    }
}
