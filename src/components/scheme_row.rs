//! Scheme Row Component
//!
//! One editable entry: delete button, type selector and amount input.

use leptos::prelude::*;

use crate::components::TypeSelector;
use crate::editor::EditorAction;
use crate::models::{SchemeEntry, SchemeType};
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields, AppStore};

fn entry_field<T>(store: AppStore, id: &StoredValue<String>, read: impl Fn(&SchemeEntry) -> T) -> Option<T> {
    id.with_value(|id| store.editor().with(|editor| editor.get(id).map(&read)))
}

/// A single scheme row in the editor list
#[component]
pub fn SchemeRowEditor(id: String, position: usize) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(id);

    let scheme_type = Signal::derive(move || {
        entry_field(store, &id, |entry| entry.scheme_type).unwrap_or_default()
    });
    let amount = move || entry_field(store, &id, |entry| entry.amount.clone()).unwrap_or_default();
    let amount_visible = move || entry_field(store, &id, SchemeEntry::amount_visible).unwrap_or(false);

    let on_type_change = move |value: SchemeType| {
        store_dispatch(&store, EditorAction::SetType { id: id.get_value(), value });
    };

    view! {
        <div class="scheme-row">
            <span class="drag-handle">"⠿"</span>
            <span class="scheme-position">{position + 1}</span>

            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_dispatch(&store, EditorAction::Remove { id: id.get_value() });
                }
            >
                "-"
            </button>

            <TypeSelector current_type=scheme_type on_change=on_type_change />

            <Show when=amount_visible>
                <input
                    type="number"
                    name="amount"
                    class="input"
                    placeholder="0"
                    prop:value=amount
                    on:input=move |ev| {
                        store_dispatch(&store, EditorAction::SetAmount {
                            id: id.get_value(),
                            value: event_target_value(&ev),
                        });
                    }
                />
            </Show>
        </div>
    }
}
