//! Flat-file persistence for the koyomi event list.
//!
//! The store treats the event list as an opaque JSON blob: it never
//! inspects recurrence rules or computes occurrences, and it never stores
//! derived occurrences. Every mutation rewrites the whole blob, matching
//! the flat single-list model the rest of the system assumes.

use koyomi_core::event::Event;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store-level errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// File-backed event list.
pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// ## Summary
    /// Opens the store at `path`, loading the event list. A missing file
    /// is an empty store, not an error.
    ///
    /// ## Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let events = if path.exists() {
            let blob = fs::read_to_string(&path)?;
            serde_json::from_str(&blob)?
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), count = events.len(), "opened event store");
        Ok(Self { path, events })
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// ## Summary
    /// Inserts `event`, or replaces the stored event with the same id, and
    /// rewrites the blob.
    ///
    /// ## Errors
    /// Returns an error when the blob cannot be written.
    pub fn save_event(&mut self, event: Event) -> StoreResult<()> {
        if let Some(existing) = self.events.iter_mut().find(|e| e.id == event.id) {
            *existing = event;
        } else {
            self.events.push(event);
        }
        self.persist()
    }

    /// ## Summary
    /// Removes the event with `id`, rewriting the blob. Returns whether an
    /// event was removed.
    ///
    /// ## Errors
    /// Returns an error when the blob cannot be written.
    pub fn delete_event(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// ## Summary
    /// Replaces the whole list, rewriting the blob.
    ///
    /// ## Errors
    /// Returns an error when the blob cannot be written.
    pub fn replace_all(&mut self, events: Vec<Event>) -> StoreResult<()> {
        self.events = events;
        self.persist()
    }

    /// ## Summary
    /// Removes every event, rewriting the blob.
    ///
    /// ## Errors
    /// Returns an error when the blob cannot be written.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.events.clear();
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string_pretty(&self.events)?;
        fs::write(&self.path, blob)?;
        tracing::trace!(path = %self.path.display(), count = self.events.len(), "persisted event list");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_core::event::EventDraft;
    use koyomi_core::recurrence::RecurrenceRule;
    use koyomi_core::types::Category;

    fn sample_event(title: &str) -> Event {
        EventDraft {
            title: title.to_string(),
            date: "2024-04-01".to_string(),
            time: "14:00".to_string(),
            description: String::new(),
            category: Category::Family,
            recurrence: RecurrenceRule::None,
        }
        .create()
        .expect("valid draft")
    }

    #[test_log::test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = EventStore::open(dir.path().join("events.json")).expect("open");
        assert!(store.events().is_empty());
    }

    #[test_log::test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("events.json");

        let event = sample_event("Picnic");
        let id = event.id.clone();
        {
            let mut store = EventStore::open(&path).expect("open");
            store.save_event(event.clone()).expect("save");
        }

        let reloaded = EventStore::open(&path).expect("reopen");
        assert_eq!(reloaded.events(), &[event]);
        assert_eq!(reloaded.get(&id).expect("stored event").title, "Picnic");
    }

    #[test_log::test]
    fn test_save_event_upserts_by_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = EventStore::open(dir.path().join("events.json")).expect("open");

        let mut event = sample_event("Picnic");
        store.save_event(event.clone()).expect("save");
        event.title = "Picnic (moved)".to_string();
        store.save_event(event.clone()).expect("resave");

        assert_eq!(store.events().len(), 1);
        assert_eq!(store.events()[0].title, "Picnic (moved)");
    }

    #[test_log::test]
    fn test_delete_and_clear() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = EventStore::open(dir.path().join("events.json")).expect("open");

        let keep = sample_event("Keep");
        let gone = sample_event("Gone");
        store.save_event(keep.clone()).expect("save");
        store.save_event(gone.clone()).expect("save");

        assert!(store.delete_event(&gone.id).expect("delete"));
        assert!(!store.delete_event("no-such-id").expect("delete missing"));
        assert_eq!(store.events().len(), 1);

        store.clear().expect("clear");
        assert!(store.events().is_empty());

        let reloaded = EventStore::open(store.path()).expect("reopen");
        assert!(reloaded.events().is_empty());
    }

    #[test_log::test]
    fn test_corrupt_blob_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("events.json");
        fs::write(&path, "not json").expect("write");
        let result = EventStore::open(&path);
        assert!(matches!(result, Err(StoreError::Serde(_))));
    }
}
