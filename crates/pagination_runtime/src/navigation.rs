//! Clamped previous/next navigation and the button-disabled flags derived from state.

use crate::model::PaginationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Navigation requested by a button click.
pub enum NavigationIntent {
    /// One page back.
    Previous,
    /// One page forward.
    Next,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Disabled flags of the two navigation buttons.
pub struct ButtonStates {
    /// Disabled on the first page or while the control is disabled.
    pub prev_disabled: bool,
    /// Disabled on the resolved last page or while the control is disabled.
    pub next_disabled: bool,
}

/// Derives both button flags from `state`.
pub fn button_states(state: &PaginationState) -> ButtonStates {
    ButtonStates {
        prev_disabled: state.disabled || state.current_page() == 0,
        next_disabled: state.disabled || state.resolved_at_last_page(),
    }
}

/// Computes the clamped `start` a navigation intent moves to.
///
/// Returns `None` when the intent must leave `start` untouched: navigation is disabled, `next`
/// is requested on the last page, or the clamped target equals the current `start`. Clamping
/// happens here regardless of the rendered button state, so a stale click can never move
/// `start` below zero or past the last row.
pub fn navigate(state: &PaginationState, intent: NavigationIntent) -> Option<u64> {
    if state.disabled {
        return None;
    }

    let target = match intent {
        NavigationIntent::Previous => state.start.saturating_sub(state.page_size),
        NavigationIntent::Next => {
            if button_states(state).next_disabled {
                return None;
            }
            let last_row = state
                .total
                .map_or(u64::MAX, |total| total.saturating_sub(1));
            state.start.saturating_add(state.page_size).min(last_row)
        }
    };

    (target != state.start).then_some(target)
}
