//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::editor::{EditorAction, EditorState};
use crate::models::SchemeRow;
use crate::submit::SubmitPhase;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Entries being edited, in list order
    pub editor: EditorState,
    /// Rows last read back from the collection
    pub persisted: Vec<SchemeRow>,
    /// Progress of the current submit
    pub phase: SubmitPhase,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run an editor action against the store
pub fn store_dispatch(store: &AppStore, action: EditorAction) {
    let editor_field = store.editor();
    let mut editor = editor_field.write();
    let current = std::mem::take(&mut *editor);
    *editor = current.reduce(action);
}

/// Replace the displayed rows with a fresh fetch
pub fn store_set_persisted(store: &AppStore, rows: Vec<SchemeRow>) {
    *store.persisted().write() = rows;
}

pub fn store_set_phase(store: &AppStore, phase: SubmitPhase) {
    *store.phase().write() = phase;
}
