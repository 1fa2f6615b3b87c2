//! Note persistence over a key-value namespace
//!
//! The whole collection lives under a single key as a JSON array. Every
//! mutation loads the array, edits it and writes it back while holding a
//! lock shared by all clones of the store.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::kv::{KeyValueStore, NOTES_KEY};
use crate::models::{now_millis, Note, NoteId};

/// Durable CRUD over the note collection
#[derive(Clone, Debug)]
pub struct NoteStore<S: KeyValueStore> {
    kv: S,
    lock: Arc<Mutex<()>>,
    last_issued: Arc<AtomicI64>,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            lock: Arc::default(),
            last_issued: Arc::new(AtomicI64::new(0)),
        }
    }

    /// All notes in stored order: newest creations first, updates keep their slot
    pub fn get_all(&self) -> Result<Vec<Note>> {
        self.load()
    }

    /// First note with the given id
    pub fn get_by_id(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.load()?.into_iter().find(|note| note.id == id))
    }

    /// Insert or replace a note, refreshing its timestamp
    ///
    /// An existing note with the same id is replaced in place; otherwise the
    /// note is inserted at the front. Returns the stored copy.
    pub fn save(&self, note: &Note) -> Result<Note> {
        let _guard = self.guard();
        let mut notes = self.load()?;

        let stored = Note {
            timestamp: now_millis(),
            ..note.clone()
        };
        if let Some(existing) = notes.iter_mut().find(|existing| existing.id == stored.id) {
            *existing = stored.clone();
            tracing::debug!("Updated note {}", stored.id);
        } else {
            notes.insert(0, stored.clone());
            self.last_issued
                .fetch_max(stored.id.as_i64(), Ordering::SeqCst);
            tracing::debug!("Inserted note {}", stored.id);
        }

        self.persist(&notes)?;
        Ok(stored)
    }

    /// Edit a stored note in place under the store lock
    ///
    /// Returns `Ok(None)` without writing when no note has `id`. An error from
    /// `mutate` aborts the edit and leaves storage untouched. The id cannot be
    /// changed and the timestamp is refreshed.
    pub fn update<E>(
        &self,
        id: NoteId,
        mutate: impl FnOnce(&mut Note) -> std::result::Result<(), E>,
    ) -> std::result::Result<Option<Note>, E>
    where
        E: From<Error>,
    {
        let _guard = self.guard();
        let mut notes = self.load()?;

        let Some(slot) = notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };
        let mut edited = slot.clone();
        mutate(&mut edited)?;
        edited.id = id;
        edited.timestamp = now_millis();
        *slot = edited.clone();

        self.persist(&notes)?;
        tracing::debug!("Updated note {}", id);
        Ok(Some(edited))
    }

    /// Allocate a fresh id and save a new note at the front
    pub fn create(&self, title: &str, content: &str) -> Result<Note> {
        let _guard = self.guard();
        let mut notes = self.load()?;

        let note = Note::new(self.next_id(&notes), title, content);
        notes.insert(0, note.clone());
        self.persist(&notes)?;

        tracing::debug!("Created note {}", note.id);
        Ok(note)
    }

    /// Remove every note with the given id; returns whether anything was removed
    pub fn delete(&self, id: NoteId) -> Result<bool> {
        let _guard = self.guard();
        let mut notes = self.load()?;

        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Ok(false);
        }

        self.persist(&notes)?;
        tracing::debug!("Deleted note {}", id);
        Ok(true)
    }

    /// Notes whose title or content contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Result<Vec<Note>> {
        let notes = self.load()?;
        let query = query.trim();
        if query.is_empty() {
            return Ok(notes);
        }
        Ok(notes.into_iter().filter(|note| note.matches(query)).collect())
    }

    /// Drop the stored collection, including an unreadable one
    ///
    /// Clears the whole namespace, so this also recovers from a namespace
    /// file that is not valid JSON.
    pub fn reset(&self) -> Result<()> {
        let _guard = self.guard();
        self.kv.clear()?;
        tracing::warn!("Note collection reset");
        Ok(())
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.kv.get(NOTES_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|error| {
            tracing::warn!("Stored note list is malformed: {}", error);
            Error::corrupt(NOTES_KEY, error)
        })
    }

    fn persist(&self, notes: &[Note]) -> Result<()> {
        let serialized = serde_json::to_string(notes)?;
        self.kv.set(NOTES_KEY, &serialized)
    }

    /// Clock-derived id that is strictly greater than anything issued or stored
    fn next_id(&self, notes: &[Note]) -> NoteId {
        let max_stored = notes.iter().map(|note| note.id.as_i64()).max().unwrap_or(0);
        let floor = self
            .last_issued
            .load(Ordering::SeqCst)
            .max(max_stored)
            .saturating_add(1);
        let id = now_millis().max(floor);
        self.last_issued.fetch_max(id, Ordering::SeqCst);
        NoteId::from_raw(id)
    }
}
