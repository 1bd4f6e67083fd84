use std::rc::Rc;

use element_contract::{ElementHost, UpdateScheduler, UpdateTask};
use leptos::request_animation_frame;

/// Runs element update passes on the next animation frame.
///
/// Writes made during one browser turn are coalesced by the element before they reach the
/// scheduler, so each frame sees at most one pass per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameScheduler;

impl FrameScheduler {
    /// Host resources for an element mounted in the browser.
    pub fn host() -> ElementHost {
        ElementHost::new(Rc::new(Self))
    }
}

impl UpdateScheduler for FrameScheduler {
    fn schedule(&self, task: UpdateTask) {
        request_animation_frame(task);
    }
}
