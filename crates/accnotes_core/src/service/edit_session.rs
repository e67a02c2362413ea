//! Edit-form state machine.
//!
//! # Invariants
//! - The form is visible iff the session is `Editing`.
//! - A draft exists only while editing; `Idle` carries no stale index.

use crate::model::note::Note;

/// Which note a draft will be written to on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Save appends a new note.
    New,
    /// Save replaces the note at this position.
    Existing(usize),
}

/// Form field values being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        target: EditTarget,
        draft: NoteDraft,
    },
}

impl EditSession {
    /// Opens an empty form for a new note.
    pub fn begin_create(&mut self) {
        *self = Self::Editing {
            target: EditTarget::New,
            draft: NoteDraft::default(),
        };
    }

    /// Opens the form pre-filled with `note`, targeting `index`.
    ///
    /// Allowed from any state; an open draft is discarded.
    pub fn begin_edit(&mut self, index: usize, note: &Note) {
        *self = Self::Editing {
            target: EditTarget::Existing(index),
            draft: NoteDraft::from(note),
        };
    }

    /// Points an open `New` draft at an existing position.
    pub fn retarget(&mut self, index: usize) {
        if let Self::Editing { target, .. } = self {
            if *target == EditTarget::New {
                *target = EditTarget::Existing(index);
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Updates the draft title. Returns `false` when idle.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        match self.draft_mut() {
            Some(draft) => {
                draft.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Updates the draft text. Returns `false` when idle.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match self.draft_mut() {
            Some(draft) => {
                draft.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn is_form_visible(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn target(&self) -> Option<EditTarget> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(*target),
        }
    }

    pub fn draft(&self) -> Option<&NoteDraft> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut NoteDraft> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }
}
