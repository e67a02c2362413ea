//! Single-screen controller binding store, edit form, query and alerts.
//!
//! # Responsibility
//! - Translate user triggers into note store operations.
//! - Raise success/failure alerts for saves only.
//!
//! # Invariants
//! - A successful save returns the session to `Idle`.
//! - A failed save keeps the form open with the draft intact; a failed
//!   create is retargeted at the note it left in memory.
//! - Delete never raises an alert, whatever its outcome.

use crate::model::note::Note;
use crate::search::filter::SearchView;
use crate::service::alerts::{Alert, Notifier};
use crate::service::edit_session::{EditSession, EditTarget};
use crate::service::note_store::{LoadStatus, NoteStore, NoteStoreError};
use crate::storage::kv::KeyValueStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for screen triggers.
#[derive(Debug)]
pub enum ScreenError {
    /// `save` was triggered without an open form.
    NotEditing,
    Store(NoteStoreError),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEditing => write!(f, "no note is being edited"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotEditing => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NoteStoreError> for ScreenError {
    fn from(value: NoteStoreError) -> Self {
        Self::Store(value)
    }
}

pub struct NotesScreen<S: KeyValueStore, N: Notifier> {
    store: NoteStore<S>,
    session: EditSession,
    query: String,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> NotesScreen<S, N> {
    pub fn new(store: NoteStore<S>, notifier: N) -> Self {
        Self {
            store,
            session: EditSession::Idle,
            query: String::new(),
            notifier,
        }
    }

    /// Load-on-start trigger.
    pub fn start(&mut self) -> LoadStatus {
        self.store.load()
    }

    pub fn begin_create(&mut self) {
        self.session.begin_create();
    }

    /// Opens the form on the note at `index` of the full list.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), ScreenError> {
        let note = self.store.get(index).ok_or(NoteStoreError::IndexOutOfRange {
            index,
            len: self.store.len(),
        })?;
        self.session.begin_edit(index, note);
        Ok(())
    }

    pub fn change_title(&mut self, title: impl Into<String>) -> bool {
        self.session.set_title(title)
    }

    pub fn change_text(&mut self, text: impl Into<String>) -> bool {
        self.session.set_text(text)
    }

    /// Writes the draft to its target and raises an alert either way.
    pub fn save(&mut self) -> Result<(), ScreenError> {
        let EditSession::Editing { target, draft } = &self.session else {
            return Err(ScreenError::NotEditing);
        };
        let target = *target;
        let title = draft.title.clone();
        let text = draft.text.clone();
        let result = match target {
            EditTarget::New => self.store.add(title, text),
            EditTarget::Existing(index) => self.store.edit(index, title, text),
        };

        match result {
            Ok(()) => {
                self.notifier.notify(Alert::note_saved());
                self.session.cancel();
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(Alert::note_save_failed());
                if target == EditTarget::New && err.is_durability_gap() {
                    // The appended note stays in memory; a retry must overwrite it.
                    self.session.retarget(self.store.len().saturating_sub(1));
                }
                Err(err.into())
            }
        }
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Removes the note at `index` of the full list without alerting.
    pub fn delete(&mut self, index: usize) -> Result<Note, ScreenError> {
        Ok(self.store.delete(index)?)
    }

    pub fn change_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Notes matching the current query.
    pub fn visible_notes(&self) -> SearchView<'_> {
        self.store.search(&self.query)
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NoteStore<S> {
        &mut self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
