//! Leptos presentational catalog for the pagination custom elements.
//!
//! The crate renders the headless engines from `pagination_runtime` and owns the stable
//! `data-ui-*` DOM contract consumed by the catalog CSS layers. Views never mutate engine
//! state directly: they forward user intent (clicks, selections) to the engine and re-render
//! from the snapshot each update pass delivers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod scheduler;

pub use primitives::{
    Loading, LoadingType, ModalFooter, PageSizesSelect, PagesSelect, Pagination, SkeletonText,
    SkeletonTextType,
};
pub use scheduler::FrameScheduler;
