//! Element-scoped event targets, bubbling dispatch, and listener handles.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
};

use serde_json::Value;

/// Listener callback registered on an [`EventHub`].
pub type EventListener = Rc<dyn Fn(&ElementEvent)>;

#[derive(Debug, Clone, PartialEq)]
/// Custom event envelope carrying a JSON `detail` payload.
pub struct ElementEvent {
    /// Event name.
    pub name: String,
    /// Event payload.
    pub detail: Value,
    /// Whether dispatch continues to ancestor targets.
    pub bubbles: bool,
}

impl ElementEvent {
    /// Creates a bubbling event.
    pub fn new(name: impl Into<String>, detail: Value) -> Self {
        Self {
            name: name.into(),
            detail,
            bubbles: true,
        }
    }

    /// Creates an event that stays on the dispatching target.
    pub fn local(name: impl Into<String>, detail: Value) -> Self {
        Self {
            bubbles: false,
            ..Self::new(name, detail)
        }
    }

    /// Reads `detail[field]` as a number, coercing numeric strings.
    ///
    /// Returns `None` when the field is missing, not numeric, or not finite.
    pub fn detail_number(&self, field: &str) -> Option<f64> {
        let value = self.detail.get(field)?;
        let number = match value {
            Value::Number(number) => number.as_f64()?,
            Value::String(raw) => raw.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        number.is_finite().then_some(number)
    }
}

#[derive(Default)]
struct HubState {
    next_listener_id: u64,
    listeners: HashMap<String, Vec<(u64, EventListener)>>,
    parent: Option<Weak<RefCell<HubState>>>,
}

impl HubState {
    fn remove(&mut self, name: &str, listener_id: u64) {
        if let Some(listeners) = self.listeners.get_mut(name) {
            listeners.retain(|(id, _)| *id != listener_id);
            if listeners.is_empty() {
                self.listeners.remove(name);
            }
        }
    }
}

/// Event target owned by one element.
///
/// Cloning shares the same target. A hub may be parented to another hub so that bubbling
/// events dispatched on a descendant reach listeners registered on its ancestors.
#[derive(Clone, Default)]
pub struct EventHub {
    state: Rc<RefCell<HubState>>,
}

impl EventHub {
    /// Creates a detached event target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-parents this target; `None` detaches it from the tree.
    pub fn set_parent(&self, parent: Option<&EventHub>) {
        self.state.borrow_mut().parent = parent.map(|parent| Rc::downgrade(&parent.state));
    }

    /// Registers `listener` for events named `name`.
    ///
    /// The subscription lives until the returned handle is released or dropped.
    pub fn listen(
        &self,
        name: impl Into<String>,
        listener: impl Fn(&ElementEvent) + 'static,
    ) -> ListenerHandle {
        let name = name.into();
        let listener_id = {
            let mut state = self.state.borrow_mut();
            state.next_listener_id += 1;
            let listener_id = state.next_listener_id;
            state
                .listeners
                .entry(name.clone())
                .or_default()
                .push((listener_id, Rc::new(listener)));
            listener_id
        };

        ListenerHandle {
            hub: Rc::downgrade(&self.state),
            name,
            listener_id,
            active: Cell::new(true),
        }
    }

    /// Dispatches `event` on this target and, when it bubbles, on every ancestor.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &ElementEvent) -> usize {
        let mut invoked = invoke(&self.state, event);
        if !event.bubbles {
            return invoked;
        }

        let mut next = parent_of(&self.state);
        while let Some(ancestor) = next {
            invoked += invoke(&ancestor, event);
            next = parent_of(&ancestor);
        }
        invoked
    }

    /// Number of live listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.state
            .borrow()
            .listeners
            .get(name)
            .map_or(0, Vec::len)
    }

    /// Number of live listeners across all event names.
    pub fn live_listeners(&self) -> usize {
        self.state.borrow().listeners.values().map(Vec::len).sum()
    }
}

fn invoke(state: &Rc<RefCell<HubState>>, event: &ElementEvent) -> usize {
    // Snapshot the listener list so handlers may subscribe, release, or dispatch re-entrantly.
    let listeners: Vec<EventListener> = state
        .borrow()
        .listeners
        .get(&event.name)
        .map(|listeners| listeners.iter().map(|(_, l)| Rc::clone(l)).collect())
        .unwrap_or_default();
    for listener in &listeners {
        listener(event);
    }
    listeners.len()
}

fn parent_of(state: &Rc<RefCell<HubState>>) -> Option<Rc<RefCell<HubState>>> {
    state.borrow().parent.as_ref().and_then(Weak::upgrade)
}

/// Owns exactly one active subscription on an [`EventHub`].
///
/// [`ListenerHandle::release`] detaches the listener on first call and is a no-op afterwards.
/// Dropping the handle releases it, so every detachment path tears the subscription down.
pub struct ListenerHandle {
    hub: Weak<RefCell<HubState>>,
    name: String,
    listener_id: u64,
    active: Cell<bool>,
}

impl ListenerHandle {
    /// Detaches the listener if it is still attached.
    pub fn release(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().remove(&self.name, self.listener_id);
        }
    }

    /// Whether the subscription is still attached.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Event name this handle listens to.
    pub fn event_name(&self) -> &str {
        &self.name
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("name", &self.name)
            .field("active", &self.active.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn released_handle_stops_delivery_and_second_release_is_noop() {
        let hub = EventHub::new();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let handle = hub.listen("bx-ping", move |_| seen.set(seen.get() + 1));

        hub.dispatch(&ElementEvent::new("bx-ping", json!({})));
        handle.release();
        handle.release();
        hub.dispatch(&ElementEvent::new("bx-ping", json!({})));

        assert_eq!(hits.get(), 1);
        assert!(!handle.is_active());
        assert_eq!(hub.live_listeners(), 0);
    }

    #[test]
    fn dropping_handle_releases_subscription() {
        let hub = EventHub::new();
        {
            let _handle = hub.listen("bx-ping", |_| {});
            assert_eq!(hub.listener_count("bx-ping"), 1);
        }
        assert_eq!(hub.listener_count("bx-ping"), 0);
    }

    #[test]
    fn bubbling_events_reach_ancestors_and_local_events_do_not() {
        let host = EventHub::new();
        let child = EventHub::new();
        child.set_parent(Some(&host));
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let _handle = host.listen("bx-changed", move |_| seen.set(seen.get() + 1));

        assert_eq!(child.dispatch(&ElementEvent::new("bx-changed", json!({}))), 1);
        assert_eq!(child.dispatch(&ElementEvent::local("bx-changed", json!({}))), 0);

        child.set_parent(None);
        assert_eq!(child.dispatch(&ElementEvent::new("bx-changed", json!({}))), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn handler_may_dispatch_reentrantly() {
        let hub = EventHub::new();
        let echoes = Rc::new(Cell::new(0));
        let inner_hub = hub.clone();
        let _first = hub.listen("bx-first", move |_| {
            inner_hub.dispatch(&ElementEvent::new("bx-second", json!({})));
        });
        let seen = Rc::clone(&echoes);
        let _second = hub.listen("bx-second", move |_| seen.set(seen.get() + 1));

        hub.dispatch(&ElementEvent::new("bx-first", json!({})));
        assert_eq!(echoes.get(), 1);
    }

    #[test]
    fn detail_number_coerces_numeric_strings_only() {
        let event = ElementEvent::new(
            "bx-pages-select-changed",
            json!({ "value": "3", "other": true, "float": 2.5 }),
        );
        assert_eq!(event.detail_number("value"), Some(3.0));
        assert_eq!(event.detail_number("float"), Some(2.5));
        assert_eq!(event.detail_number("other"), None);
        assert_eq!(event.detail_number("missing"), None);
    }
}
