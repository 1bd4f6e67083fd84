//! Headless page selector and page-size selector elements.
//!
//! Both hold the value the pagination element pushes into them and, on user selection,
//! dispatch their change event from their own event target so it bubbles to the host.

use std::{any::Any, cell::Cell, ops::Range, rc::Rc};

use element_contract::{CustomElement, ElementEvent, EventHub, ObserverHandle, Observers};
use leptos::logging;

use crate::{
    child_sync::{PageSizesSelectControl, PagesSelectControl},
    model::{PaginationConfig, SelectChange, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES},
};

/// Most pages a page selector offers at once.
pub const MAX_PAGE_OPTIONS: u64 = 100;

/// Window of at most [`MAX_PAGE_OPTIONS`] pages out of `count`, kept around `current`.
fn page_window(current: u64, count: u64) -> Range<u64> {
    if count <= MAX_PAGE_OPTIONS {
        return 0..count;
    }
    let first = current
        .saturating_sub(MAX_PAGE_OPTIONS / 2)
        .min(count - MAX_PAGE_OPTIONS);
    first..first + MAX_PAGE_OPTIONS
}

fn dispatch_change(events: &EventHub, name: &str, value: u64) {
    match serde_json::to_value(SelectChange { value }) {
        Ok(detail) => {
            events.dispatch(&ElementEvent::new(name, detail));
        }
        Err(err) => logging::warn!("{name} payload serialize failed: {err}"),
    }
}

/// Page selector (`bx-pages-select`).
pub struct PagesSelectElement {
    tag: String,
    change_event: String,
    events: EventHub,
    value: Cell<u64>,
    total_pages: Cell<Option<u64>>,
    sync_writes: Cell<usize>,
    observers: Observers<()>,
}

impl PagesSelectElement {
    /// Creates a selector tagged and wired for `config`; `events` is its own target.
    pub fn new(events: EventHub, config: &PaginationConfig) -> Rc<Self> {
        Rc::new(Self {
            tag: config.selector_pages_select.clone(),
            change_event: config.event_after_change_page.clone(),
            events,
            value: Cell::new(0),
            total_pages: Cell::new(None),
            sync_writes: Cell::new(0),
            observers: Observers::new(),
        })
    }

    /// Event target the change event is dispatched from.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Zero-based current page.
    pub fn value(&self) -> u64 {
        self.value.get()
    }

    /// `None` while the page count is indeterminate.
    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages.get()
    }

    /// Selectable zero-based pages, at most [`MAX_PAGE_OPTIONS`] of them around the current one.
    ///
    /// With an indeterminate count only pages up to the current one are known to exist.
    pub fn page_options(&self) -> Range<u64> {
        let current = self.value.get();
        let count = self
            .total_pages
            .get()
            .unwrap_or_else(|| current.saturating_add(1));
        page_window(current, count)
    }

    /// Number of values pushed in by the owning pagination element.
    pub fn sync_writes(&self) -> usize {
        self.sync_writes.get()
    }

    /// Runs `observer` after every pushed value until the returned handle is released.
    pub fn observe(&self, observer: impl Fn() + 'static) -> ObserverHandle {
        self.observers.subscribe(move |_| observer())
    }

    /// User selection of a zero-based page.
    pub fn select(&self, page: u64) {
        self.value.set(page);
        dispatch_change(&self.events, &self.change_event, page);
    }
}

impl PagesSelectControl for PagesSelectElement {
    fn set_value(&self, page: u64) {
        self.value.set(page);
        self.sync_writes.set(self.sync_writes.get() + 1);
        self.observers.notify(&());
    }

    fn set_total_pages(&self, total_pages: Option<u64>) {
        self.total_pages.set(total_pages);
        self.sync_writes.set(self.sync_writes.get() + 1);
        self.observers.notify(&());
    }
}

impl CustomElement for PagesSelectElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn connected(&self) {}

    fn disconnected(&self) {
        self.events.set_parent(None);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Page-size selector (`bx-page-sizes-select`).
pub struct PageSizesSelectElement {
    tag: String,
    change_event: String,
    events: EventHub,
    value: Cell<u64>,
    page_sizes: Vec<u64>,
    sync_writes: Cell<usize>,
    observers: Observers<()>,
}

impl PageSizesSelectElement {
    /// Creates a selector offering [`DEFAULT_PAGE_SIZES`].
    pub fn new(events: EventHub, config: &PaginationConfig) -> Rc<Self> {
        Self::with_page_sizes(events, config, DEFAULT_PAGE_SIZES.to_vec())
    }

    /// Creates a selector offering `page_sizes`.
    pub fn with_page_sizes(
        events: EventHub,
        config: &PaginationConfig,
        page_sizes: Vec<u64>,
    ) -> Rc<Self> {
        Rc::new(Self {
            tag: config.selector_page_sizes_select.clone(),
            change_event: config.event_after_change_page_size.clone(),
            events,
            value: Cell::new(DEFAULT_PAGE_SIZE),
            page_sizes,
            sync_writes: Cell::new(0),
            observers: Observers::new(),
        })
    }

    /// Event target the change event is dispatched from.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Selected rows per page.
    pub fn value(&self) -> u64 {
        self.value.get()
    }

    /// Offered page sizes.
    pub fn page_sizes(&self) -> &[u64] {
        &self.page_sizes
    }

    /// Number of values pushed in by the owning pagination element.
    pub fn sync_writes(&self) -> usize {
        self.sync_writes.get()
    }

    /// Runs `observer` after every pushed value until the returned handle is released.
    pub fn observe(&self, observer: impl Fn() + 'static) -> ObserverHandle {
        self.observers.subscribe(move |_| observer())
    }

    /// User selection of a page size.
    pub fn select(&self, page_size: u64) {
        self.value.set(page_size);
        dispatch_change(&self.events, &self.change_event, page_size);
    }
}

impl PageSizesSelectControl for PageSizesSelectElement {
    fn set_value(&self, page_size: u64) {
        self.value.set(page_size);
        self.sync_writes.set(self.sync_writes.get() + 1);
        self.observers.notify(&());
    }
}

impl CustomElement for PageSizesSelectElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn connected(&self) {}

    fn disconnected(&self) {
        self.events.set_parent(None);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
