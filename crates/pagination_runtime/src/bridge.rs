//! Subscriptions to the two descendant change events.

use element_contract::{ElementError, ElementEvent, EventHub, ListenerHandle};
use leptos::logging;

use crate::model::PaginationConfig;

/// Owns the page-changed and page-size-changed subscriptions of one mounted element.
///
/// At most two handles are live at any time: attaching again releases the previous pair first.
#[derive(Debug, Default)]
pub struct EventBridge {
    handles: Vec<ListenerHandle>,
}

impl EventBridge {
    /// Bridge with nothing attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes both handlers on `events`, which receives the descendants' bubbling events.
    pub fn attach(
        &mut self,
        events: &EventHub,
        config: &PaginationConfig,
        on_page: impl Fn(u64) + 'static,
        on_page_size: impl Fn(u64) + 'static,
    ) {
        self.detach();

        self.handles.push(events.listen(
            config.event_after_change_page.clone(),
            move |event| match read_page_index(event) {
                Ok(page) => on_page(page),
                Err(err) => logging::warn!("page change ignored: {err}"),
            },
        ));
        self.handles.push(events.listen(
            config.event_after_change_page_size.clone(),
            move |event| match read_page_size(event) {
                Ok(page_size) => on_page_size(page_size),
                Err(err) => logging::warn!("page size change ignored: {err}"),
            },
        ));
    }

    /// Releases the handles in reverse order of acquisition.
    pub fn detach(&mut self) {
        while let Some(handle) = self.handles.pop() {
            handle.release();
        }
    }

    /// Number of subscriptions still attached.
    pub fn live_handles(&self) -> usize {
        self.handles.iter().filter(|handle| handle.is_active()).count()
    }
}

fn read_value(event: &ElementEvent) -> Result<f64, ElementError> {
    event
        .detail_number("value")
        .filter(|value| *value >= 0.0)
        .ok_or_else(|| ElementError::MalformedPayload {
            event: event.name.clone(),
            field: "value".to_string(),
        })
}

/// Zero-based target page carried by a page-selector change; fractions are floored.
///
/// # Errors
///
/// Returns [`ElementError::MalformedPayload`] when `value` is missing, non-numeric, or negative.
pub fn read_page_index(event: &ElementEvent) -> Result<u64, ElementError> {
    read_value(event).map(|value| value.floor() as u64)
}

/// Rows per page carried by a page-size-selector change.
///
/// # Errors
///
/// Returns [`ElementError::MalformedPayload`] for unusable payloads and
/// [`ElementError::InvalidPageSize`] when the size floors to zero.
pub fn read_page_size(event: &ElementEvent) -> Result<u64, ElementError> {
    match read_value(event)?.floor() as u64 {
        0 => Err(ElementError::InvalidPageSize),
        page_size => Ok(page_size),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn recording_bridge(
        events: &EventHub,
        config: &PaginationConfig,
    ) -> (EventBridge, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bridge = EventBridge::new();
        let pages = Rc::clone(&log);
        let sizes = Rc::clone(&log);
        bridge.attach(
            events,
            config,
            move |page| pages.borrow_mut().push(format!("page={page}")),
            move |size| sizes.borrow_mut().push(format!("size={size}")),
        );
        (bridge, log)
    }

    #[test]
    fn payloads_reach_the_matching_handler() {
        let config = PaginationConfig::default();
        let events = EventHub::new();
        let (_bridge, log) = recording_bridge(&events, &config);

        events.dispatch(&ElementEvent::new(
            "bx-pages-select-changed",
            json!({ "value": 3 }),
        ));
        events.dispatch(&ElementEvent::new(
            "bx-page-sizes-select-changed",
            json!({ "value": "25" }),
        ));

        assert_eq!(*log.borrow(), vec!["page=3", "size=25"]);
    }

    #[test]
    fn reattaching_never_exceeds_two_subscriptions() {
        let config = PaginationConfig::default();
        let events = EventHub::new();
        let (mut bridge, log) = recording_bridge(&events, &config);
        assert_eq!(bridge.live_handles(), 2);

        for _ in 0..3 {
            bridge.detach();
            bridge.detach();
            assert_eq!(events.live_listeners(), 0);
            let pages = Rc::clone(&log);
            bridge.attach(
                &events,
                &config,
                move |page| pages.borrow_mut().push(format!("page={page}")),
                |_| {},
            );
        }
        assert_eq!(events.live_listeners(), 2);

        events.dispatch(&ElementEvent::new(
            "bx-pages-select-changed",
            json!({ "value": 1 }),
        ));
        assert_eq!(*log.borrow(), vec!["page=1"]);
    }

    #[test]
    fn malformed_payloads_are_dropped() {
        let config = PaginationConfig::default();
        let events = EventHub::new();
        let (_bridge, log) = recording_bridge(&events, &config);

        for detail in [json!({}), json!({ "value": "abc" }), json!({ "value": -1 })] {
            events.dispatch(&ElementEvent::new("bx-pages-select-changed", detail));
        }
        events.dispatch(&ElementEvent::new(
            "bx-page-sizes-select-changed",
            json!({ "value": 0 }),
        ));

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn page_index_is_floored_and_not_clamped() {
        let event = ElementEvent::new("bx-pages-select-changed", json!({ "value": 2.7 }));
        assert_eq!(read_page_index(&event), Ok(2));
        let far = ElementEvent::new("bx-pages-select-changed", json!({ "value": 9000 }));
        assert_eq!(read_page_index(&far), Ok(9000));
        assert_eq!(
            read_page_size(&ElementEvent::new("bx-page-sizes-select-changed", json!({ "value": 0.4 }))),
            Err(ElementError::InvalidPageSize)
        );
    }
}
