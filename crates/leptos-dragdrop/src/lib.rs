//! Leptos DragDrop Utilities
//!
//! Drag-and-drop reordering of a flat list for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Rows are addressed by their current index in the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop on a row (take its index)
    Row(usize),
    /// Drop on the gap before row `n` (`n == len` is the end of the list)
    Gap(usize),
}

/// Index the dragged row ends up at, or `None` if the drop moves nothing
pub fn destination_index(from: usize, target: DropTarget, len: usize) -> Option<usize> {
    if from >= len {
        return None;
    }
    let to = match target {
        DropTarget::Row(index) => index,
        // Removing the dragged row first shifts later gaps up by one
        DropTarget::Gap(gap) if gap > from => gap - 1,
        DropTarget::Gap(gap) => gap,
    };
    if to >= len || to == from {
        None
    } else {
        Some(to)
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Mousedown on a row that has not turned into a drag yet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    pub index: usize,
    pub x: i32,
    pub y: i32,
}

impl Press {
    /// Pointer moved far enough from the press to count as a drag
    pub fn exceeded_by(&self, x: i32, y: i32) -> bool {
        (x - self.x).abs() > DRAG_THRESHOLD_PX || (y - self.y).abs() > DRAG_THRESHOLD_PX
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging: RwSignal<Option<usize>>,
    pub target: RwSignal<Option<DropTarget>>,
    pub press: RwSignal<Option<Press>>,
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging.get().is_some()
    }

    pub fn is_dragging_row(&self, index: usize) -> bool {
        self.dragging.get() == Some(index)
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.target.get() == Some(target)
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        target: RwSignal::new(None),
        press: RwSignal::new(None),
    }
}

/// Reset all drag state
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging.set(None);
    dnd.target.set(None);
    dnd.press.set(None);
}

/// Create mousedown handler for draggable rows
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls inside a row keep their normal behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
            {
                return;
            }
        }
        dnd.press.set(Some(Press { index, x: ev.client_x(), y: ev.client_y() }));
    }
}

fn on_document(event: &str, handler: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
    handler.forget();
}

/// Create mouseenter handler for rows
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        // Dropping a row on itself is not a target
        if matches!(dnd.dragging.get_untracked(), Some(dragging) if dragging != index) {
            dnd.target.set(Some(DropTarget::Row(index)));
        }
    }
}

/// Create mouseenter handler for the gap before row `gap`
pub fn make_on_gap_mouseenter(dnd: DndSignals, gap: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.target.set(Some(DropTarget::Gap(gap)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.target.set(None);
        }
    }
}

/// Bind document mousemove and mouseup for the whole list
///
/// `on_drop(from, target)` fires only when a drag ends over a target;
/// a release outside any target leaves the list alone.
pub fn bind_document_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, DropTarget) + 'static,
{
    use wasm_bindgen::closure::Closure;

    on_document(
        "mousemove",
        Closure::new(move |ev: web_sys::MouseEvent| {
            if dnd.dragging.get_untracked().is_some() {
                return;
            }
            if let Some(press) = dnd.press.get_untracked() {
                if press.exceeded_by(ev.client_x(), ev.client_y()) {
                    dnd.dragging.set(Some(press.index));
                }
            }
        }),
    );

    on_document(
        "mouseup",
        Closure::new(move |_ev: web_sys::MouseEvent| {
            let dragging = dnd.dragging.get_untracked();
            let target = dnd.target.get_untracked();
            end_drag(&dnd);

            if let (Some(from), Some(target)) = (dragging, target) {
                on_drop(from, target);
            }
        }),
    );
}
