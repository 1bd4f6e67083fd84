//! Diff-aware pagination property store.
//!
//! Every setter compares against the current value: equal writes are dropped, changed writes
//! mark their field dirty. The owner asks [`PaginationStore::claim_update`] whether a new
//! update pass must be scheduled, so a burst of writes in one turn yields exactly one pass.

use std::rc::Rc;

use element_contract::ElementError;

use crate::{
    model::{DirtyFields, PaginationField, PaginationState},
    status::{StatusFormatter, StatusFormatters},
};

#[derive(Debug, Default)]
/// Property values, status formatters, and the fields changed since the last pass.
pub struct PaginationStore {
    state: PaginationState,
    formatters: StatusFormatters,
    dirty: DirtyFields,
    update_requested: bool,
}

fn write<T: PartialEq>(
    slot: &mut T,
    value: T,
    field: PaginationField,
    dirty: &mut DirtyFields,
) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    dirty.insert(field);
    true
}

impl PaginationStore {
    /// Store holding the default values with nothing dirty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current property values.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Current status formatters.
    pub fn formatters(&self) -> &StatusFormatters {
        &self.formatters
    }

    /// Accepts any offset; clamping belongs to navigation, not to direct writes.
    pub fn set_start(&mut self, start: u64) -> bool {
        write(&mut self.state.start, start, PaginationField::Start, &mut self.dirty)
    }

    /// Writes rows per page.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidPageSize`] for zero.
    pub fn set_page_size(&mut self, page_size: u64) -> Result<bool, ElementError> {
        if page_size == 0 {
            return Err(ElementError::InvalidPageSize);
        }
        Ok(write(
            &mut self.state.page_size,
            page_size,
            PaginationField::PageSize,
            &mut self.dirty,
        ))
    }

    /// Writes the total row count; `None` is unknown.
    pub fn set_total(&mut self, total: Option<u64>) -> bool {
        write(&mut self.state.total, total, PaginationField::Total, &mut self.dirty)
    }

    /// Writes the last-page override.
    pub fn set_at_last_page(&mut self, at_last_page: Option<bool>) -> bool {
        write(
            &mut self.state.at_last_page,
            at_last_page,
            PaginationField::AtLastPage,
            &mut self.dirty,
        )
    }

    /// Writes the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        write(
            &mut self.state.disabled,
            disabled,
            PaginationField::Disabled,
            &mut self.dirty,
        )
    }

    /// Writes the previous-page button title.
    pub fn set_prev_button_text(&mut self, text: impl Into<String>) -> bool {
        write(
            &mut self.state.prev_button_text,
            text.into(),
            PaginationField::PrevButtonText,
            &mut self.dirty,
        )
    }

    /// Writes the next-page button title.
    pub fn set_next_button_text(&mut self, text: impl Into<String>) -> bool {
        write(
            &mut self.state.next_button_text,
            text.into(),
            PaginationField::NextButtonText,
            &mut self.dirty,
        )
    }

    /// Writes the page-size selector label.
    pub fn set_page_size_label_text(&mut self, text: impl Into<String>) -> bool {
        write(
            &mut self.state.page_size_label_text,
            text.into(),
            PaginationField::PageSizeLabelText,
            &mut self.dirty,
        )
    }

    /// Replaces the determinate-total formatter; the same `Rc` is a no-op.
    pub fn set_determinate_formatter(&mut self, formatter: StatusFormatter) -> bool {
        if Rc::ptr_eq(&self.formatters.determinate, &formatter) {
            return false;
        }
        self.formatters.determinate = formatter;
        self.dirty.insert(PaginationField::DeterminateFormatter);
        true
    }

    /// Replaces the indeterminate-total formatter; the same `Rc` is a no-op.
    pub fn set_indeterminate_formatter(&mut self, formatter: StatusFormatter) -> bool {
        if Rc::ptr_eq(&self.formatters.indeterminate, &formatter) {
            return false;
        }
        self.formatters.indeterminate = formatter;
        self.dirty.insert(PaginationField::IndeterminateFormatter);
        true
    }

    /// Marks every field changed, as for the first render.
    pub fn mark_all_dirty(&mut self) {
        self.dirty = DirtyFields::all();
    }

    /// Fields changed since the last pass started.
    pub fn dirty(&self) -> DirtyFields {
        self.dirty
    }

    /// Returns `true` exactly once per batch of pending changes: the caller must then
    /// schedule one update pass.
    pub fn claim_update(&mut self) -> bool {
        if self.dirty.is_empty() || self.update_requested {
            return false;
        }
        self.update_requested = true;
        true
    }

    /// Starts an update pass: hands over the dirty set and re-arms scheduling.
    pub fn take_dirty(&mut self) -> DirtyFields {
        self.update_requested = false;
        std::mem::take(&mut self.dirty)
    }
}
