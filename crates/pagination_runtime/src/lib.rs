//! Headless pagination engine: state store, clamped navigation, descendant event bridge, and
//! child sync behind a single deferred update pass.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod bridge;
pub mod catalog;
pub mod child_sync;
pub mod element;
pub mod model;
pub mod navigation;
pub mod selects;
pub mod status;
pub mod store;

pub use catalog::{catalog_elements, define_catalog, CatalogElement};
pub use child_sync::{
    sync_children, LightDom, PageSizesSelectControl, PagesSelectControl, SyncReport,
};
pub use element::{
    PaginationElement, PaginationView, NEXT_BUTTON_PART, PREV_BUTTON_PART,
};
pub use model::*;
pub use navigation::{button_states, navigate, ButtonStates, NavigationIntent};
pub use selects::{PageSizesSelectElement, PagesSelectElement, MAX_PAGE_OPTIONS};
pub use status::{
    format_determinate, format_indeterminate, status_parts, StatusFormatter, StatusFormatters,
    StatusParts,
};
pub use store::PaginationStore;
