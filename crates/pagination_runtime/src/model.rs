//! Pagination state, dirty-field tracking, element configuration, and event payloads.

use serde::{Deserialize, Serialize};

/// Tag and event-name prefix of the default catalog.
pub const DEFAULT_PREFIX: &str = "bx";
/// Rows per page before any write.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Default title of the previous-page button.
pub const DEFAULT_PREV_BUTTON_TEXT: &str = "Previous page";
/// Default title of the next-page button.
pub const DEFAULT_NEXT_BUTTON_TEXT: &str = "Next page";
/// Default label of the page-size selector.
pub const DEFAULT_PAGE_SIZE_LABEL_TEXT: &str = "Items per page:";
/// Page sizes offered by a page-size selector created without an explicit list.
pub const DEFAULT_PAGE_SIZES: [u64; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Authoritative pagination properties, excluding the injected status formatters.
pub struct PaginationState {
    /// Zero-based index of the first visible row.
    pub start: u64,
    /// Rows per page; always greater than zero.
    pub page_size: u64,
    /// Total row count, `None` when the caller cannot determine it.
    pub total: Option<u64>,
    /// Explicit last-page override; `None` when unset.
    pub at_last_page: Option<bool>,
    /// Disables navigation globally.
    pub disabled: bool,
    /// Title of the previous-page button.
    pub prev_button_text: String,
    /// Title of the next-page button.
    pub next_button_text: String,
    /// Label of the page-size selector.
    pub page_size_label_text: String,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            start: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total: None,
            at_last_page: None,
            disabled: false,
            prev_button_text: DEFAULT_PREV_BUTTON_TEXT.to_string(),
            next_button_text: DEFAULT_NEXT_BUTTON_TEXT.to_string(),
            page_size_label_text: DEFAULT_PAGE_SIZE_LABEL_TEXT.to_string(),
        }
    }
}

impl PaginationState {
    /// Zero-based index of the page containing `start`.
    pub fn current_page(&self) -> u64 {
        self.start / self.page_size.max(1)
    }

    /// Page count for the current total; `None` when the total is unknown.
    pub fn total_pages(&self) -> Option<u64> {
        self.total.map(|total| total.div_ceil(self.page_size.max(1)))
    }

    /// Explicit override when set, otherwise whether the current page reaches the total.
    ///
    /// Without an override and without a known total the last page cannot be derived.
    pub fn resolved_at_last_page(&self) -> bool {
        match (self.at_last_page, self.total) {
            (Some(at_last_page), _) => at_last_page,
            (None, Some(total)) => self.start.saturating_add(self.page_size) >= total,
            (None, None) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Properties tracked by the store's dirty set.
pub enum PaginationField {
    /// `start`.
    Start,
    /// `page_size`.
    PageSize,
    /// `total`.
    Total,
    /// `at_last_page`.
    AtLastPage,
    /// `disabled`.
    Disabled,
    /// `prev_button_text`.
    PrevButtonText,
    /// `next_button_text`.
    NextButtonText,
    /// `page_size_label_text`.
    PageSizeLabelText,
    /// Status formatter used while the total is known.
    DeterminateFormatter,
    /// Status formatter used while the total is unknown.
    IndeterminateFormatter,
}

impl PaginationField {
    /// Every field, in declaration order.
    pub const ALL: [PaginationField; 10] = [
        Self::Start,
        Self::PageSize,
        Self::Total,
        Self::AtLastPage,
        Self::Disabled,
        Self::PrevButtonText,
        Self::NextButtonText,
        Self::PageSizeLabelText,
        Self::DeterminateFormatter,
        Self::IndeterminateFormatter,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Set of properties changed since the last update pass.
pub struct DirtyFields(u16);

impl DirtyFields {
    /// Every field marked, as for the first render.
    pub fn all() -> Self {
        PaginationField::ALL
            .iter()
            .fold(Self::default(), |dirty, field| dirty.with(*field))
    }

    /// Returns a copy with `field` marked.
    pub fn with(self, field: PaginationField) -> Self {
        Self(self.0 | field.bit())
    }

    /// Marks `field`.
    pub fn insert(&mut self, field: PaginationField) {
        self.0 |= field.bit();
    }

    /// Whether `field` is marked.
    pub fn contains(self, field: PaginationField) -> bool {
        self.0 & field.bit() != 0
    }

    /// Whether any of `fields` is marked.
    pub fn contains_any(self, fields: &[PaginationField]) -> bool {
        fields.iter().any(|field| self.contains(*field))
    }

    /// Whether nothing is marked.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Marked fields, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = PaginationField> {
        PaginationField::ALL
            .into_iter()
            .filter(move |field| self.contains(*field))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Event names and descendant selectors one pagination element uses.
pub struct PaginationConfig {
    /// Tag of the pagination element itself.
    pub tag: String,
    /// Outward event fired after a user-initiated change of `start`.
    pub event_after_change_current: String,
    /// Inward event fired by page selectors.
    pub event_after_change_page: String,
    /// Inward event fired by page-size selectors.
    pub event_after_change_page_size: String,
    /// Selector matching page selectors in the light DOM.
    pub selector_pages_select: String,
    /// Selector matching page-size selectors in the light DOM.
    pub selector_page_sizes_select: String,
}

impl PaginationConfig {
    /// Tags, event names, and selectors for a catalog registered under `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            tag: format!("{prefix}-pagination"),
            event_after_change_current: format!("{prefix}-pagination-changed-current"),
            event_after_change_page: format!("{prefix}-pages-select-changed"),
            event_after_change_page_size: format!("{prefix}-page-sizes-select-changed"),
            selector_pages_select: format!("{prefix}-pages-select"),
            selector_page_sizes_select: format!("{prefix}-page-sizes-select"),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Payload of the outward current-row change event.
pub struct PaginationChange {
    /// New zero-based `start`.
    pub start: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Payload of the page selector and page-size selector change events.
pub struct SelectChange {
    /// Zero-based page index, or rows per page for a page-size selector.
    pub value: u64,
}
