//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the notes screen triggers to Dart via FRB.
//! - Return plain envelopes carrying list views and pending alerts.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide screen serves every call; access is serialized.
//! - Returned indexes are positions in the full note list.

use accnotes_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Alert, AlertQueue, AlertSeverity, AppConfig, EditTarget, KeyValueStore, NoteStore,
    NotesScreen, SqliteKeyValueStore, UnavailableKeyValueStore,
};
use log::error;
use std::sync::{Mutex, OnceLock};

type Storage = Box<dyn KeyValueStore + Send>;
type Screen = NotesScreen<Storage, AlertQueue>;

static SCREEN: OnceLock<Mutex<Option<Screen>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the rendered note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Position in the full list; pass back to edit/delete calls.
    pub index: u32,
    pub title: String,
    pub text: String,
}

/// Alert the UI should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteAlert {
    /// `true` for success, `false` for failure.
    pub success: bool,
    pub title: String,
    pub message: String,
}

/// Form state shown by the edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub visible: bool,
    /// `None` while creating a new note or when the form is hidden.
    pub editing_index: Option<u32>,
    pub title: String,
    pub text: String,
}

/// Screen snapshot returned by every trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenResponse {
    /// Whether the trigger succeeded.
    pub ok: bool,
    /// Human-readable outcome for diagnostics.
    pub message: String,
    /// Notes matching the current query, in list order.
    pub items: Vec<NoteItem>,
    pub form: EditForm,
    /// Alerts raised by this trigger, oldest first.
    pub alerts: Vec<NoteAlert>,
}

/// Opens the notes database and loads the stored list.
///
/// The database path comes from `ACCNOTES_DB_PATH` (temp dir fallback).
/// Calling it again reloads from storage and resets the form and query.
///
/// When the database cannot be opened the screen still starts with an empty
/// list over an unavailable store: every trigger keeps working and saves
/// raise the failure alert. The response then has `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_start() -> ScreenResponse {
    let config = AppConfig::from_env();
    let (storage, open_error): (Storage, Option<String>) =
        match SqliteKeyValueStore::open(&config.db_path) {
            Ok(storage) => (Box::new(storage) as Storage, None),
            Err(err) => {
                error!(
                    "event=ffi_start module=ffi status=error error_code=storage_unavailable error={err}"
                );
                let reason = err.to_string();
                (
                    Box::new(UnavailableKeyValueStore::new(reason.clone())) as Storage,
                    Some(reason),
                )
            }
        };

    let mut screen = NotesScreen::new(
        NoteStore::with_key(storage, config.storage_key),
        AlertQueue::new(),
    );
    let status = screen.start();

    let Ok(mut slot) = screen_slot().lock() else {
        return ScreenResponse::unavailable("notes_start failed: screen lock poisoned");
    };
    let response = match open_error {
        None => snapshot(&mut screen, true, format!("{status:?}")),
        Some(reason) => snapshot(
            &mut screen,
            false,
            format!("notes_start degraded: storage unavailable: {reason}"),
        ),
    };
    *slot = Some(screen);
    response
}

/// Opens an empty form for a new note.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_begin_create() -> ScreenResponse {
    with_screen("notes_begin_create", |screen| {
        screen.begin_create();
        Ok("Creating note.".to_string())
    })
}

/// Opens the form pre-filled with the note at `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_begin_edit(index: u32) -> ScreenResponse {
    with_screen("notes_begin_edit", |screen| {
        screen
            .begin_edit(index as usize)
            .map(|()| format!("Editing note {index}."))
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_change_title(title: String) -> ScreenResponse {
    with_screen("notes_change_title", |screen| {
        form_change(screen.change_title(title))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_change_text(text: String) -> ScreenResponse {
    with_screen("notes_change_text", |screen| {
        form_change(screen.change_text(text))
    })
}

/// Saves the open form; the response carries the resulting alert.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_save() -> ScreenResponse {
    with_screen("notes_save", |screen| {
        screen
            .save()
            .map(|()| "Note saved.".to_string())
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_cancel() -> ScreenResponse {
    with_screen("notes_cancel", |screen| {
        screen.cancel();
        Ok("Edit cancelled.".to_string())
    })
}

/// Deletes the note at `index`. Never raises an alert.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(index: u32) -> ScreenResponse {
    with_screen("notes_delete", |screen| {
        screen
            .delete(index as usize)
            .map(|_| "Note deleted.".to_string())
            .map_err(|err| err.to_string())
    })
}

/// Updates the search query and returns the filtered list.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_change_query(query: String) -> ScreenResponse {
    with_screen("notes_change_query", |screen| {
        screen.change_query(query);
        Ok("Query updated.".to_string())
    })
}

impl ScreenResponse {
    fn unavailable(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            items: Vec::new(),
            form: EditForm::hidden(),
            alerts: Vec::new(),
        }
    }
}

impl EditForm {
    fn hidden() -> Self {
        Self {
            visible: false,
            editing_index: None,
            title: String::new(),
            text: String::new(),
        }
    }
}

fn screen_slot() -> &'static Mutex<Option<Screen>> {
    SCREEN.get_or_init(|| Mutex::new(None))
}

fn with_screen(
    operation: &'static str,
    f: impl FnOnce(&mut Screen) -> Result<String, String>,
) -> ScreenResponse {
    let Ok(mut slot) = screen_slot().lock() else {
        return ScreenResponse::unavailable(format!("{operation} failed: screen lock poisoned"));
    };
    let Some(screen) = slot.as_mut() else {
        return ScreenResponse::unavailable(format!(
            "{operation} failed: notes_start has not been called"
        ));
    };

    match f(screen) {
        Ok(message) => snapshot(screen, true, message),
        Err(err) => snapshot(screen, false, format!("{operation} failed: {err}")),
    }
}

fn form_change(accepted: bool) -> Result<String, String> {
    if accepted {
        Ok("Form updated.".to_string())
    } else {
        Err("no note is being edited".to_string())
    }
}

fn snapshot(screen: &mut Screen, ok: bool, message: String) -> ScreenResponse {
    let items = screen
        .visible_notes()
        .iter()
        .map(|hit| NoteItem {
            index: to_ffi_index(hit.index),
            title: hit.note.title.clone(),
            text: hit.note.text.clone(),
        })
        .collect();

    let form = match screen.session().draft() {
        Some(draft) => EditForm {
            visible: true,
            editing_index: match screen.session().target() {
                Some(EditTarget::Existing(index)) => Some(to_ffi_index(index)),
                _ => None,
            },
            title: draft.title.clone(),
            text: draft.text.clone(),
        },
        None => EditForm::hidden(),
    };

    let alerts = screen
        .notifier_mut()
        .drain()
        .into_iter()
        .map(to_note_alert)
        .collect();

    ScreenResponse {
        ok,
        message,
        items,
        form,
        alerts,
    }
}

fn to_ffi_index(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

fn to_note_alert(alert: Alert) -> NoteAlert {
    NoteAlert {
        success: alert.severity == AlertSeverity::Success,
        title: alert.title.to_string(),
        message: alert.message,
    }
}
