//! Result Table Component
//!
//! Rows as persisted in the collection, in store order.

use leptos::prelude::*;

use crate::models::SchemeRow;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::submit::SubmitPhase;

/// "PhP 5 /kWh" style description of a persisted row
pub fn describe_amount(row: &SchemeRow) -> String {
    let unit = row.kind().unit();
    if unit.is_empty() {
        format!("PhP {}", row.amount)
    } else {
        format!("PhP {} {}", row.amount, unit)
    }
}

#[component]
pub fn ResultTable() -> impl IntoView {
    let store = use_app_store();

    let loading = move || store.phase().get() == SubmitPhase::Fetching;
    let rows = move || {
        store
            .persisted()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! { <p>"Fetching Database..."</p> }
        >
            <div class="result-table">
                <div class="header">
                    <h4 class="description">"Order"</h4>
                    <h4 class="description">"Pricing Scheme"</h4>
                    <h4 class="description">"Description"</h4>
                </div>

                <For
                    each=rows
                    key=|(index, row)| (*index, row.id.clone())
                    children=move |(index, row)| {
                        view! {
                            <div class="data">
                                <span class="description">{index + 1}</span>
                                <span class="description">{row.scheme_type.clone()}</span>
                                <span class="description">{describe_amount(&row)}</span>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
