//! Status text formatting.
//!
//! Formatters receive one-based display indices even though the state is zero-based.

use std::rc::Rc;

use crate::model::PaginationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs handed to a status formatter.
pub struct StatusParts {
    /// One-based index of the first visible row.
    pub start: u64,
    /// One-based index of the last visible row; `None` when it cannot be stated.
    pub end: Option<u64>,
    /// Total row count; `None` when unknown.
    pub count: Option<u64>,
}

/// Injected status formatting strategy.
pub type StatusFormatter = Rc<dyn Fn(&StatusParts) -> String>;

/// `1–10 of 100 items`; an unknown end falls back to the count.
pub fn format_determinate(parts: &StatusParts) -> String {
    let count = parts.count.unwrap_or_default();
    let end = parts.end.unwrap_or(count);
    let suffix = if count == 1 { "" } else { "s" };
    format!("{}–{end} of {count} item{suffix}", parts.start)
}

/// `Item 1–10`, or `Item 11–` when the end is unknown.
pub fn format_indeterminate(parts: &StatusParts) -> String {
    match parts.end {
        Some(end) => format!("Item {}–{end}", parts.start),
        None => format!("Item {}–", parts.start),
    }
}

/// Builds formatter inputs from the current state.
pub fn status_parts(state: &PaginationState) -> StatusParts {
    let end = if state.resolved_at_last_page() {
        None
    } else {
        state
            .total
            .map(|total| state.start.saturating_add(state.page_size).min(total))
    };
    StatusParts {
        start: state.start.saturating_add(1),
        end,
        count: state.total,
    }
}

#[derive(Clone)]
/// The pair of replaceable status formatters.
pub struct StatusFormatters {
    /// Used while the total is known.
    pub determinate: StatusFormatter,
    /// Used while the total is unknown.
    pub indeterminate: StatusFormatter,
}

impl Default for StatusFormatters {
    fn default() -> Self {
        Self {
            determinate: Rc::new(format_determinate),
            indeterminate: Rc::new(format_indeterminate),
        }
    }
}

impl StatusFormatters {
    /// Renders status text, choosing the strategy by whether the total is known.
    pub fn render(&self, state: &PaginationState) -> String {
        let parts = status_parts(state);
        let format = if state.total.is_some() {
            &self.determinate
        } else {
            &self.indeterminate
        };
        format(&parts)
    }
}

impl std::fmt::Debug for StatusFormatters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusFormatters").finish_non_exhaustive()
    }
}
