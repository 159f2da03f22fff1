//! Scheme List Component
//!
//! The editable entries with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit DropZones between rows.

use leptos::prelude::*;

use crate::components::SchemeRowEditor;
use crate::editor::EditorAction;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Scheme list with DnD support
#[component]
pub fn SchemeList() -> impl IntoView {
    let store = use_app_store();

    let dnd = create_dnd_signals();

    bind_document_handlers(dnd, move |from, target| {
        let len = store.editor().with_untracked(|editor| editor.len());
        match destination_index(from, target, len) {
            Some(to) => {
                log::debug!("[DND] Drop {:?}: moving {} -> {}", target, from, to);
                store_dispatch(&store, EditorAction::Reorder { from, to });
            }
            None => log::debug!("[DND] Drop {:?} from {}: no move", target, from),
        }
    });

    let rows = move || {
        store.editor().with(|editor| {
            editor
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| (index, entry.id.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="scheme-list">
            <DropZone dnd=dnd gap=0 />

            <For
                each=rows
                // Index is part of the key so positions and DnD handlers follow reorders
                key=|(index, id)| (*index, id.clone())
                children=move |(index, id)| {
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_row_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let row_class = move || {
                        let mut c = String::from("scheme");
                        if dnd.is_dragging_row(index) { c.push_str(" dragging"); }
                        if dnd.is_target(DropTarget::Row(index)) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <SchemeRowEditor id=id position=index />
                        </div>

                        <DropZone dnd=dnd gap=index + 1 />
                    }
                }
            />
        </div>
    }
}

/// Drop zone component - a horizontal separator for dropping rows
///
/// `gap` is the index of the row the zone sits above; the last zone uses
/// the list length.
#[component]
pub fn DropZone(dnd: DndSignals, gap: usize) -> impl IntoView {
    let on_mouseenter = make_on_gap_mouseenter(dnd, gap);
    let on_mouseleave = make_on_mouseleave(dnd);

    let class = move || zone_class(dnd.is_dragging(), dnd.is_target(DropTarget::Gap(gap)));

    view! {
        <div
            class=class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}

/// Zones stay hidden until a drag starts
fn zone_class(dragging: bool, active: bool) -> String {
    let mut c = String::from("drop-zone");
    if !dragging { c.push_str(" hidden"); }
    if active { c.push_str(" active"); }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_class() {
        assert_eq!(zone_class(false, false), "drop-zone hidden");
        assert_eq!(zone_class(true, false), "drop-zone");
        assert_eq!(zone_class(true, true), "drop-zone active");
    }

    #[test]
    fn test_gap_zone_props() {
        let dnd = create_dnd_signals();
        let props = DropZoneProps::builder().dnd(dnd).gap(2).build();
        assert_eq!(props.gap, 2);

        dnd.dragging.set(Some(0));
        dnd.target.set(Some(DropTarget::Gap(props.gap)));
        assert!(dnd.is_target(DropTarget::Gap(2)));
        // Dropping row 0 above row 2 lands it at index 1
        assert_eq!(destination_index(0, DropTarget::Gap(props.gap), 3), Some(1));
    }
}
