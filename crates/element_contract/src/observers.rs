//! Callback lists notified after element state changes, with owning release handles.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

type Observer<T> = Rc<dyn Fn(&T)>;

struct ObserverList<T> {
    next_id: u64,
    entries: Vec<(u64, Observer<T>)>,
}

/// Ordered list of observers notified with a borrowed value.
///
/// Each subscription lives until its [`ObserverHandle`] is released or dropped, so a view
/// that mounts and unmounts repeatedly leaves no callbacks behind.
pub struct Observers<T> {
    list: Rc<RefCell<ObserverList<T>>>,
}

impl<T: 'static> Observers<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(ObserverList {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers `observer`; it runs on every [`Observers::notify`] until the handle goes.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> ObserverHandle {
        let id = {
            let mut list = self.list.borrow_mut();
            list.next_id += 1;
            let id = list.next_id;
            list.entries.push((id, Rc::new(observer)));
            id
        };

        let list: Weak<RefCell<ObserverList<T>>> = Rc::downgrade(&self.list);
        ObserverHandle {
            release: RefCell::new(Some(Box::new(move || {
                if let Some(list) = list.upgrade() {
                    list.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
                }
            }))),
        }
    }

    /// Calls every live observer with `value`, in subscription order.
    ///
    /// Returns the number of observers called.
    pub fn notify(&self, value: &T) -> usize {
        // Snapshot so observers may subscribe or release while being notified.
        let observers: Vec<Observer<T>> = self
            .list
            .borrow()
            .entries
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in &observers {
            observer(value);
        }
        observers.len()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.list.borrow().entries.len()
    }

    /// Whether no subscription is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns one subscription on an [`Observers`] list.
///
/// Releasing is idempotent and dropping the handle releases it.
#[must_use = "dropping the handle unsubscribes the observer immediately"]
pub struct ObserverHandle {
    release: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ObserverHandle {
    /// Unsubscribes the observer if it is still subscribed.
    pub fn release(&self) {
        let release = self.release.borrow_mut().take();
        if let Some(release) = release {
            release();
        }
    }

    /// Whether the subscription is still live.
    pub fn is_active(&self) -> bool {
        self.release.borrow().is_some()
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn released_observer_is_not_notified_again() {
        let observers = Observers::<u64>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handle = observers.subscribe(move |value| sink.borrow_mut().push(*value));

        assert_eq!(observers.notify(&1), 1);
        handle.release();
        handle.release();
        assert_eq!(observers.notify(&2), 0);

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(!handle.is_active());
        assert!(observers.is_empty());
    }

    #[test]
    fn dropping_the_handle_unsubscribes() {
        let observers = Observers::<()>::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..5 {
            let counter = Rc::clone(&hits);
            let handle = observers.subscribe(move |_| counter.set(counter.get() + 1));
            observers.notify(&());
            drop(handle);
        }

        assert_eq!(hits.get(), 5);
        assert_eq!(observers.len(), 0);
    }

    #[test]
    fn observer_may_release_itself_while_notified() {
        let observers = Observers::<()>::new();
        let slot: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));
        let own_slot = Rc::clone(&slot);
        let counter = Rc::clone(&hits);
        let handle = observers.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let Some(handle) = own_slot.borrow_mut().take() {
                handle.release();
            }
        });
        *slot.borrow_mut() = Some(handle);

        observers.notify(&());
        observers.notify(&());

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn handle_outliving_the_list_releases_quietly() {
        let observers = Observers::<()>::new();
        let handle = observers.subscribe(|_| {});
        drop(observers);

        handle.release();
        assert!(!handle.is_active());
    }
}
