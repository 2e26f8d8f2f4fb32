use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::Callback;

struct Inner<T> {
    value: T,
    next_id: usize,
    subscribers: Vec<(usize, Callback<T>)>,
}

/// A value shared between widgets that do not share a component tree.
///
/// Writes are last-write-wins and synchronous: `set` stores the value and then
/// notifies every subscriber, even when the value did not change.
pub struct SharedStore<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> SharedStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn set(&self, value: T) {
        // Release the borrow before notifying so subscribers may read the store.
        let subscribers: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };

        for subscriber in subscribers {
            subscriber.emit(value.clone());
        }
    }

    /// Registers `callback` until the returned guard is dropped.
    pub fn subscribe(&self, callback: Callback<T>) -> Subscription<T> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, callback));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Unsubscribes from a [`SharedStore`] on drop.
pub struct Subscription<T> {
    id: usize,
    store: Weak<RefCell<Inner<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}
