//! UI Components
//!
//! Reusable Leptos components.

mod type_selector;
mod scheme_row;
mod scheme_list;
mod result_table;

pub use type_selector::TypeSelector;
pub use scheme_row::SchemeRowEditor;
pub use scheme_list::SchemeList;
pub use result_table::ResultTable;
