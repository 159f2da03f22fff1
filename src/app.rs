//! Pricing Scheme App
//!
//! Editor list on top, submit button, persisted results below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ResultTable, SchemeList};
use crate::config::ApiConfig;
use crate::editor::EditorAction;
use crate::error::SubmitError;
use crate::gateway::HttpSchemeCollection;
use crate::store::{store_dispatch, store_set_persisted, store_set_phase, AppState, AppStateStoreFields};
use crate::submit::submit;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = ApiConfig::default();
    log::info!("[APP] Collection endpoint: {}", config.collection_url());

    let can_submit = move || {
        store.editor().with(|editor| editor.can_submit()) && !store.phase().get().is_busy()
    };

    let on_submit = move |_: web_sys::MouseEvent| {
        if store.phase().get_untracked().is_busy() {
            return;
        }
        let entries = store.editor().with_untracked(|editor| editor.entries.clone());
        let collection = HttpSchemeCollection::new(&config);
        spawn_local(async move {
            match submit(&collection, &entries, |phase| store_set_phase(&store, phase)).await {
                Ok(rows) => store_set_persisted(&store, rows),
                Err(SubmitError::Validation(e)) => alert(&e.to_string()),
                // Already logged; previous results stay on screen
                Err(_) => {}
            }
        });
    };

    view! {
        <main class="container">
            <h2>"Pricing Schemes"</h2>

            <div>
                <button on:click=move |_| store_dispatch(&store, EditorAction::Add)>
                    "Add pricing scheme"
                </button>
            </div>

            <SchemeList />

            <Show when=can_submit>
                <div>
                    <button class="submit-btn" on:click=on_submit.clone()>"Submit"</button>
                </div>
            </Show>

            <ResultTable />
        </main>
    }
}
