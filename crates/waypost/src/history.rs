// File: waypost/src/history.rs
// Purpose: History collaborator contract and an in-memory implementation

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::RouterConfig;
use crate::observer::{ObserverSet, Subscription};

/// Callback fired with the new path when the history changes externally.
pub type HistoryListener = Box<dyn Fn(&str)>;

/// Listener registry for [`History`] implementations.
///
/// Every listener stays registered until its [`Subscription`] is dropped.
#[derive(Default)]
pub struct HistoryListeners {
    set: Rc<RefCell<ObserverSet<dyn Fn(&str)>>>,
}

impl HistoryListeners {
    pub fn add(&self, listener: HistoryListener) -> Subscription {
        let id = self.set.borrow_mut().insert(Rc::from(listener));
        Subscription::new(id, &self.set)
    }

    /// Calls every listener with `path`, in registration order.
    pub fn notify(&self, path: &str) {
        let listeners = self.set.borrow().snapshot();
        for listener in listeners {
            listener(path);
        }
    }

    pub fn len(&self) -> usize {
        self.set.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for HistoryListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Source of the current external path and sink for pushed entries.
///
/// A change notification (back/forward navigation, `popstate` in a browser)
/// must eventually reach every registered listener with the new path.
pub trait History {
    /// The path the router should resolve right now.
    fn current_path(&self) -> String;

    /// Records a new entry for `path`. Listeners are not notified.
    fn push(&self, path: &str);

    /// Registers a listener for externally triggered path changes.
    ///
    /// The listener is removed once the returned handle is dropped.
    fn listen(&self, listener: HistoryListener) -> Subscription;
}

#[derive(Debug)]
struct Entries {
    stack: Vec<String>,
    cursor: usize,
}

/// History kept in process memory, with browser-like back/forward.
///
/// # Examples
///
/// ```
/// use waypost::{History, MemoryHistory};
///
/// let history = MemoryHistory::new("/");
/// history.push("/a");
/// history.push("/b");
/// assert!(history.back());
/// assert_eq!(history.current_path(), "/a");
/// ```
pub struct MemoryHistory {
    entries: RefCell<Entries>,
    listeners: HistoryListeners,
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(Entries {
                stack: vec![initial_path.into()],
                cursor: 0,
            }),
            listeners: HistoryListeners::default(),
        }
    }

    /// Seeds the history from the `[router]` configuration table.
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.initial_path.clone())
    }

    /// Steps back one entry, notifying listeners. Returns `false` at the start.
    pub fn back(&self) -> bool {
        self.step(-1)
    }

    /// Steps forward one entry, notifying listeners. Returns `false` at the end.
    pub fn forward(&self) -> bool {
        self.step(1)
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().stack.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn step(&self, delta: isize) -> bool {
        let path = {
            let mut entries = self.entries.borrow_mut();
            let Some(target) = entries.cursor.checked_add_signed(delta) else {
                return false;
            };
            if target >= entries.stack.len() {
                return false;
            }
            entries.cursor = target;
            entries.stack[target].clone()
        };

        tracing::debug!(path = %path, "history moved");
        self.listeners.notify(&path);
        true
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        let entries = self.entries.borrow();
        entries.stack[entries.cursor].clone()
    }

    fn push(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        let keep = entries.cursor + 1;
        entries.stack.truncate(keep);
        entries.stack.push(path.to_string());
        entries.cursor = keep;
    }

    fn listen(&self, listener: HistoryListener) -> Subscription {
        self.listeners.add(listener)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("entries", &self.entries.borrow())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
