//! The pagination element: state store, navigation, event bridge, and child sync wired
//! together behind one deferred update pass.
//!
//! Every write funnels through the store. The first changed write in a turn schedules one
//! update pass on the host scheduler; the pass renders a [`PaginationView`], pushes derived
//! values into light-DOM selectors, and notifies render observers. User-initiated changes of
//! `start` (button clicks and page-selector events) additionally emit the outward
//! current-row event; programmatic writes never do.

use std::{
    any::Any,
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use element_contract::{
    find_codec, AttributeReflect, CustomElement, ElementError, ElementEvent, ElementHost,
    EventHub, Focusable, ObserverHandle, Observers, UpdateScheduler,
};
use leptos::logging;

use crate::{
    attributes::{observed_attribute_names, PAGINATION_ATTRIBUTES},
    bridge::EventBridge,
    child_sync::{sync_children, LightDom, SyncReport},
    model::{PaginationChange, PaginationConfig, PaginationState},
    navigation::{button_states, navigate, NavigationIntent},
    selects::{PageSizesSelectElement, PagesSelectElement},
    status::{StatusFormatter, StatusFormatters},
    store::PaginationStore,
};

/// Part name of the previous-page button, used as its focus target.
pub const PREV_BUTTON_PART: &str = "prev-button";
/// Part name of the next-page button, used as its focus target.
pub const NEXT_BUTTON_PART: &str = "next-button";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Display-ready output of one update pass.
pub struct PaginationView {
    /// Output of the active status formatter.
    pub status_text: String,
    /// Whether the previous-page button is disabled.
    pub prev_button_disabled: bool,
    /// Whether the next-page button is disabled.
    pub next_button_disabled: bool,
    /// Title and accessible label of the previous-page button.
    pub prev_button_text: String,
    /// Title and accessible label of the next-page button.
    pub next_button_text: String,
    /// Label of the page-size selector.
    pub page_size_label_text: String,
    /// Zero-based page containing `start`.
    pub current_page: u64,
    /// `None` while the total is unknown.
    pub total_pages: Option<u64>,
    /// Whether the whole control is disabled.
    pub disabled: bool,
}

impl PaginationView {
    /// Derives the display output for `state`.
    pub fn render(state: &PaginationState, formatters: &StatusFormatters) -> Self {
        let buttons = button_states(state);
        Self {
            status_text: formatters.render(state),
            prev_button_disabled: buttons.prev_disabled,
            next_button_disabled: buttons.next_disabled,
            prev_button_text: state.prev_button_text.clone(),
            next_button_text: state.next_button_text.clone(),
            page_size_label_text: state.page_size_label_text.clone(),
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            disabled: state.disabled,
        }
    }
}

struct PaginationInner {
    this: Weak<PaginationInner>,
    config: PaginationConfig,
    events: EventHub,
    scheduler: Rc<dyn UpdateScheduler>,
    light_dom: LightDom,
    store: RefCell<PaginationStore>,
    bridge: RefCell<EventBridge>,
    view: RefCell<PaginationView>,
    observers: Observers<PaginationView>,
    has_connected: Cell<bool>,
    update_passes: Cell<u64>,
    last_sync: Cell<SyncReport>,
}

impl PaginationInner {
    fn write(&self, apply: impl FnOnce(&mut PaginationStore) -> bool) -> bool {
        let changed = apply(&mut self.store.borrow_mut());
        self.request_update();
        changed
    }

    fn request_update(&self) {
        if !self.has_connected.get() || !self.store.borrow_mut().claim_update() {
            return;
        }
        let this = self.this.clone();
        self.scheduler.schedule(Box::new(move || {
            if let Some(inner) = this.upgrade() {
                inner.perform_update();
            }
        }));
    }

    fn perform_update(&self) {
        let (changed, state, view) = {
            let mut store = self.store.borrow_mut();
            let changed = store.take_dirty();
            if changed.is_empty() {
                return;
            }
            let state = store.state().clone();
            let view = PaginationView::render(&state, store.formatters());
            (changed, state, view)
        };

        *self.view.borrow_mut() = view.clone();
        let report = sync_children(&self.light_dom, &self.config, &state, changed);
        self.last_sync.set(report);
        self.update_passes.set(self.update_passes.get() + 1);

        self.observers.notify(&view);
    }

    fn change_start_from_user(&self, start: u64) {
        self.write(|store| store.set_start(start));
        match serde_json::to_value(PaginationChange { start }) {
            Ok(detail) => {
                self.events.dispatch(&ElementEvent::new(
                    self.config.event_after_change_current.clone(),
                    detail,
                ));
            }
            Err(err) => logging::warn!("pagination change payload serialize failed: {err}"),
        }
    }

    fn navigate(&self, intent: NavigationIntent) -> Option<u64> {
        let target = navigate(self.store.borrow().state(), intent)?;
        self.change_start_from_user(target);
        Some(target)
    }

    fn handle_change_page(&self, page: u64) {
        let page_size = self.store.borrow().state().page_size;
        self.change_start_from_user(page.saturating_mul(page_size));
    }

    fn handle_change_page_size(&self, page_size: u64) {
        let result = {
            let mut store = self.store.borrow_mut();
            store.set_page_size(page_size)
        };
        match result {
            Ok(_) => self.request_update(),
            Err(err) => logging::warn!("page size change rejected: {err}"),
        }
    }
}

/// Pagination element (`bx-pagination`).
///
/// Clones share one element instance.
#[derive(Clone)]
pub struct PaginationElement {
    inner: Rc<PaginationInner>,
}

impl PaginationElement {
    /// Creates an element with the default `bx` configuration.
    pub fn new(host: ElementHost) -> Self {
        Self::with_config(host, PaginationConfig::default())
    }

    /// Creates an element whose tag, event names, and child selectors come from `config`.
    pub fn with_config(host: ElementHost, config: PaginationConfig) -> Self {
        let inner = Rc::new_cyclic(|this| PaginationInner {
            this: this.clone(),
            config,
            events: host.events,
            scheduler: host.scheduler,
            light_dom: LightDom::new(),
            store: RefCell::new(PaginationStore::new()),
            bridge: RefCell::new(EventBridge::new()),
            view: RefCell::new(PaginationView::default()),
            observers: Observers::new(),
            has_connected: Cell::new(false),
            update_passes: Cell::new(0),
            last_sync: Cell::new(SyncReport::default()),
        });
        Self { inner }
    }

    /// Tag, event names, and child selectors of this element.
    pub fn config(&self) -> &PaginationConfig {
        &self.inner.config
    }

    /// Event target of the element; descendants' events bubble here.
    pub fn events(&self) -> &EventHub {
        &self.inner.events
    }

    /// Light-DOM descendants kept in sync after each update pass.
    pub fn light_dom(&self) -> &LightDom {
        &self.inner.light_dom
    }

    /// Appends a page selector to the light DOM and parents its events to this element.
    pub fn adopt_pages_select(&self, select: &Rc<PagesSelectElement>) {
        select.events().set_parent(Some(&self.inner.events));
        self.inner
            .light_dom
            .append_pages_select(select.tag_name(), select.clone());
    }

    /// Appends a page-size selector to the light DOM and parents its events to this element.
    pub fn adopt_page_sizes_select(&self, select: &Rc<PageSizesSelectElement>) {
        select.events().set_parent(Some(&self.inner.events));
        self.inner
            .light_dom
            .append_page_sizes_select(select.tag_name(), select.clone());
    }

    /// Snapshot of every public property.
    pub fn state(&self) -> PaginationState {
        self.inner.store.borrow().state().clone()
    }

    /// Zero-based index of the first row shown.
    pub fn start(&self) -> u64 {
        self.inner.store.borrow().state().start
    }

    /// Rows per page.
    pub fn page_size(&self) -> u64 {
        self.inner.store.borrow().state().page_size
    }

    /// Total row count, `None` when unknown.
    pub fn total(&self) -> Option<u64> {
        self.inner.store.borrow().state().total
    }

    /// Explicit last-page flag; `None` derives it from the total.
    pub fn at_last_page(&self) -> Option<bool> {
        self.inner.store.borrow().state().at_last_page
    }

    /// Whether the control is disabled.
    pub fn disabled(&self) -> bool {
        self.inner.store.borrow().state().disabled
    }

    /// Title of the previous-page button.
    pub fn prev_button_text(&self) -> String {
        self.inner.store.borrow().state().prev_button_text.clone()
    }

    /// Title of the next-page button.
    pub fn next_button_text(&self) -> String {
        self.inner.store.borrow().state().next_button_text.clone()
    }

    /// Label of the page-size selector.
    pub fn page_size_label_text(&self) -> String {
        self.inner.store.borrow().state().page_size_label_text.clone()
    }

    /// Status formatter used while the total is known.
    pub fn format_status_with_determinate_total(&self) -> StatusFormatter {
        Rc::clone(&self.inner.store.borrow().formatters().determinate)
    }

    /// Status formatter used while the total is unknown.
    pub fn format_status_with_indeterminate_total(&self) -> StatusFormatter {
        Rc::clone(&self.inner.store.borrow().formatters().indeterminate)
    }

    /// Programmatic write; accepted unclamped and never emits the outward event.
    pub fn set_start(&self, start: u64) {
        self.inner.write(|store| store.set_start(start));
    }

    /// Sets rows per page; `start` is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidPageSize`] for zero; the current size is kept.
    pub fn set_page_size(&self, page_size: u64) -> Result<(), ElementError> {
        let result = self.inner.store.borrow_mut().set_page_size(page_size);
        result?;
        self.inner.request_update();
        Ok(())
    }

    /// Sets the total row count; `None` makes it indeterminate.
    pub fn set_total(&self, total: Option<u64>) {
        self.inner.write(|store| store.set_total(total));
    }

    /// Overrides the derived last-page flag.
    pub fn set_at_last_page(&self, at_last_page: Option<bool>) {
        self.inner.write(|store| store.set_at_last_page(at_last_page));
    }

    /// Disables navigation and both buttons.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.write(|store| store.set_disabled(disabled));
    }

    /// Sets the previous-page button title.
    pub fn set_prev_button_text(&self, text: impl Into<String>) {
        self.inner.write(|store| store.set_prev_button_text(text));
    }

    /// Sets the next-page button title.
    pub fn set_next_button_text(&self, text: impl Into<String>) {
        self.inner.write(|store| store.set_next_button_text(text));
    }

    /// Sets the page-size selector label.
    pub fn set_page_size_label_text(&self, text: impl Into<String>) {
        self.inner.write(|store| store.set_page_size_label_text(text));
    }

    /// Replaces the status formatter used while the total is known.
    pub fn set_format_status_with_determinate_total(&self, formatter: StatusFormatter) {
        self.inner
            .write(|store| store.set_determinate_formatter(formatter));
    }

    /// Replaces the status formatter used while the total is unknown.
    pub fn set_format_status_with_indeterminate_total(&self, formatter: StatusFormatter) {
        self.inner
            .write(|store| store.set_indeterminate_formatter(formatter));
    }

    /// Handles a click on the previous-page button; returns the new `start` if it moved.
    pub fn click_prev(&self) -> Option<u64> {
        self.inner.navigate(NavigationIntent::Previous)
    }

    /// Handles a click on the next-page button; returns the new `start` if it moved.
    pub fn click_next(&self) -> Option<u64> {
        self.inner.navigate(NavigationIntent::Next)
    }

    /// View produced by the latest update pass.
    pub fn view(&self) -> PaginationView {
        self.inner.view.borrow().clone()
    }

    /// Runs `observer` with the view of every later update pass.
    ///
    /// The observer stays registered until the returned handle is released or dropped.
    pub fn on_render(&self, observer: impl Fn(&PaginationView) + 'static) -> ObserverHandle {
        self.inner.observers.subscribe(observer)
    }

    /// Number of live render observers.
    pub fn render_observers(&self) -> usize {
        self.inner.observers.len()
    }

    /// Number of completed update passes.
    pub fn update_passes(&self) -> u64 {
        self.inner.update_passes.get()
    }

    /// Child writes made by the latest update pass.
    pub fn last_sync(&self) -> SyncReport {
        self.inner.last_sync.get()
    }

    /// Live descendant-event subscriptions; two while attached, zero otherwise.
    pub fn live_subscriptions(&self) -> usize {
        self.inner.bridge.borrow().live_handles()
    }
}

impl CustomElement for PaginationElement {
    fn tag_name(&self) -> &str {
        &self.inner.config.tag
    }

    fn connected(&self) {
        let on_page = self.inner.this.clone();
        let on_page_size = self.inner.this.clone();
        self.inner.bridge.borrow_mut().attach(
            &self.inner.events,
            &self.inner.config,
            move |page| {
                if let Some(inner) = on_page.upgrade() {
                    inner.handle_change_page(page);
                }
            },
            move |page_size| {
                if let Some(inner) = on_page_size.upgrade() {
                    inner.handle_change_page_size(page_size);
                }
            },
        );

        if !self.inner.has_connected.replace(true) {
            self.inner.store.borrow_mut().mark_all_dirty();
        }
        self.inner.request_update();
    }

    fn disconnected(&self) {
        self.inner.bridge.borrow_mut().detach();
    }

    fn attributes(&self) -> Option<&dyn AttributeReflect> {
        Some(self)
    }

    fn focus(&self) -> Option<&dyn Focusable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AttributeReflect for PaginationElement {
    fn observed_attributes(&self) -> Vec<&'static str> {
        observed_attribute_names()
    }

    fn attribute_changed(&self, name: &str, value: Option<&str>) -> Result<(), ElementError> {
        let codec = find_codec(&PAGINATION_ATTRIBUTES, name)?;
        let result = (codec.parse)(&mut self.inner.store.borrow_mut(), value);
        result?;
        self.inner.request_update();
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let codec = find_codec(&PAGINATION_ATTRIBUTES, name).ok()?;
        let store = self.inner.store.borrow();
        (codec.serialize)(&store)
    }
}

impl Focusable for PaginationElement {
    fn delegated_focus_target(&self) -> Option<&'static str> {
        let buttons = button_states(self.inner.store.borrow().state());
        if !buttons.prev_disabled {
            Some(PREV_BUTTON_PART)
        } else if !buttons.next_disabled {
            Some(NEXT_BUTTON_PART)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for PaginationElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationElement")
            .field("tag", &self.inner.config.tag)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
