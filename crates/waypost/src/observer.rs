// File: waypost/src/observer.rs
// Purpose: Dependent-observer set with cancellable subscriptions

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callbacks keyed by registration id.
///
/// Keys increase monotonically, so notification follows registration order.
pub(crate) struct ObserverSet<C: ?Sized = dyn Fn()> {
    next_id: u64,
    observers: BTreeMap<u64, Rc<C>>,
}

impl<C: ?Sized> ObserverSet<C> {
    pub(crate) fn insert(&mut self, callback: Rc<C>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.insert(id, callback);
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    /// Clones the callbacks out so they can run without holding a borrow.
    pub(crate) fn snapshot(&self) -> Vec<Rc<C>> {
        self.observers.values().cloned().collect()
    }
}

impl<C: ?Sized> Default for ObserverSet<C> {
    fn default() -> Self {
        Self {
            next_id: 0,
            observers: BTreeMap::new(),
        }
    }
}

/// Removal side of an [`ObserverSet`], independent of the callback type.
pub(crate) trait Registry {
    fn remove(&mut self, id: u64) -> bool;
    fn contains(&self, id: u64) -> bool;
}

impl<C: ?Sized> Registry for ObserverSet<C> {
    fn remove(&mut self, id: u64) -> bool {
        self.observers.remove(&id).is_some()
    }

    fn contains(&self, id: u64) -> bool {
        self.observers.contains_key(&id)
    }
}

/// Handle to a registered observer or history listener.
///
/// Dropping the handle (or calling [`Subscription::unsubscribe`]) removes the
/// callback. [`Subscription::detach`] keeps it for the owner's lifetime.
#[must_use = "dropping a Subscription removes the observer immediately"]
pub struct Subscription {
    id: u64,
    observers: Weak<RefCell<dyn Registry>>,
    active: bool,
}

impl Subscription {
    pub(crate) fn new<C: ?Sized + 'static>(id: u64, observers: &Rc<RefCell<ObserverSet<C>>>) -> Self {
        let weak: Weak<RefCell<ObserverSet<C>>> = Rc::downgrade(observers);
        let observers: Weak<RefCell<dyn Registry>> = weak;
        Self {
            id,
            observers,
            active: true,
        }
    }

    /// Whether the observer is still registered with a live router.
    pub fn is_active(&self) -> bool {
        self.active
            && self
                .observers
                .upgrade()
                .is_some_and(|set| set.borrow().contains(self.id))
    }

    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    /// Leaves the callback registered until its owner is dropped.
    pub fn detach(mut self) {
        self.active = false;
    }

    fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(set) = self.observers.upgrade() {
            set.borrow_mut().remove(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Callback = Rc<dyn Fn()>;

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let count = Rc::new(Cell::new(0));
        let callback: Callback = {
            let count = Rc::clone(&count);
            Rc::new(move || count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn test_drop_removes_observer() {
        let set: Rc<RefCell<ObserverSet>> = Rc::new(RefCell::new(ObserverSet::default()));
        let (_, callback) = counter();

        let id = set.borrow_mut().insert(callback);
        let subscription = Subscription::new(id, &set);
        assert!(subscription.is_active());
        assert_eq!(set.borrow().len(), 1);

        drop(subscription);
        assert_eq!(set.borrow().len(), 0);
    }

    #[test]
    fn test_detach_keeps_observer() {
        let set: Rc<RefCell<ObserverSet>> = Rc::new(RefCell::new(ObserverSet::default()));
        let (count, callback) = counter();

        let id = set.borrow_mut().insert(callback);
        Subscription::new(id, &set).detach();

        for cb in set.borrow().snapshot() {
            cb();
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_subscription_outliving_set() {
        let set: Rc<RefCell<ObserverSet>> = Rc::new(RefCell::new(ObserverSet::default()));
        let (_, callback) = counter();
        let id = set.borrow_mut().insert(callback);
        let subscription = Subscription::new(id, &set);

        drop(set);
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }

    #[test]
    fn test_unsized_callback_types() {
        let set: Rc<RefCell<ObserverSet<dyn Fn(&str)>>> = Rc::new(RefCell::new(ObserverSet::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = set.borrow_mut().insert({
            let seen = Rc::clone(&seen);
            Rc::new(move |path: &str| seen.borrow_mut().push(path.to_string()))
        });
        let subscription = Subscription::new(id, &set);

        for cb in set.borrow().snapshot() {
            cb("/a");
        }
        assert_eq!(*seen.borrow(), vec!["/a"]);

        subscription.unsubscribe();
        assert_eq!(set.borrow().len(), 0);
    }
}
