//! Type Selector Component
//!
//! Pricing scheme type selector buttons.

use leptos::prelude::*;

use crate::models::{SchemeType, SCHEME_TYPES};

/// Type selector buttons for a scheme row
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<SchemeType>,
    on_change: impl Fn(SchemeType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {SCHEME_TYPES.iter().map(|scheme_type| {
                let value = *scheme_type;
                let is_selected = move || current_type.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {value.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
