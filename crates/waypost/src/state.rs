// File: waypost/src/state.rs
// Purpose: Reactive state accessor bound to a consumer's invalidation

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A state cell that re-renders its owner when written.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use waypost::State;
///
/// let renders = Rc::new(Cell::new(0));
/// let count = State::new(0, {
///     let renders = renders.clone();
///     move || renders.set(renders.get() + 1)
/// });
///
/// count.set(1);
/// count.update(|n| n + 1);
/// assert_eq!(count.get(), 2);
/// assert_eq!(renders.get(), 2);
/// ```
pub struct State<T> {
    value: Rc<RefCell<T>>,
    invalidate: Rc<dyn Fn()>,
}

impl<T> State<T> {
    pub fn new<F>(initial: T, invalidate: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::with_invalidator(initial, Rc::new(invalidate))
    }

    pub(crate) fn with_invalidator(initial: T, invalidate: Rc<dyn Fn()>) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            invalidate,
        }
    }

    /// Replaces the value and invalidates the owner.
    pub fn set(&self, value: T) {
        self.replace_quietly(value);
        (self.invalidate)();
    }

    /// Derives the next value from the current one.
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = updater(&self.value.borrow());
        self.set(next);
    }

    /// Reads the value without cloning it.
    pub fn with<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        reader(&self.value.borrow())
    }

    /// Replaces the value without invalidating; for writes made mid-render.
    pub(crate) fn replace_quietly(&self, value: T) {
        *self.value.borrow_mut() = value;
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            invalidate: Rc::clone(&self.invalidate),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.value.borrow()).finish()
    }
}
