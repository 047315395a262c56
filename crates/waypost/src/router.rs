// File: waypost/src/router.rs
// Purpose: Router facade owning the active route and its dependent observers

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use tracing::{debug, info};
use waypost_router::{match_path, MatchedRoute, Route};

use crate::context::Scope;
use crate::history::History;
use crate::observer::{ObserverSet, Subscription};

/// Per-instance router state.
///
/// The route list is fixed at construction; only [`Router::set_route`]
/// replaces the active route.
struct RouterState<V> {
    routes: Vec<Arc<Route<V>>>,
    active: RefCell<Option<Rc<MatchedRoute<V>>>>,
    observers: Rc<RefCell<ObserverSet>>,
    history: Rc<dyn History>,
    _history_listener: RefCell<Option<Subscription>>,
    /// Set while a navigation is resolving and pushing its entry.
    navigating: Cell<bool>,
    /// Navigations requested by observers during an outer navigation.
    queued: RefCell<VecDeque<String>>,
}

/// Router facade.
///
/// Cheap to clone: clones share the same state. The state is torn down once
/// the last handle is dropped.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use waypost::{History, MemoryHistory, Route, Router};
///
/// let history = Rc::new(MemoryHistory::new("/"));
/// let router = Router::new(
///     vec![
///         Route::new("/", |_| "home"),
///         Route::new("/users/:id", |_| "user"),
///     ],
///     history.clone(),
/// );
///
/// router.navigate("/users/7");
/// let active = router.active_route().unwrap();
/// assert_eq!(active.params["id"], "7");
/// assert_eq!(history.current_path(), "/users/7");
/// ```
pub struct Router<V: 'static> {
    state: Rc<RouterState<V>>,
}

/// Non-owning router handle, used by pending loads and history listeners.
pub struct WeakRouter<V: 'static> {
    state: Weak<RouterState<V>>,
}

impl<V: 'static> Router<V> {
    /// Builds a router over `routes` in declaration order.
    ///
    /// Resolves the history's current path once and follows later history
    /// changes.
    pub fn new(routes: Vec<Route<V>>, history: Rc<dyn History>) -> Self {
        let routes: Vec<Arc<Route<V>>> = routes.into_iter().map(Arc::new).collect();
        for (index, route) in routes.iter().enumerate() {
            debug!(index, pattern = %route.pattern(), "compiled route");
        }

        let router = Self {
            state: Rc::new(RouterState {
                routes,
                active: RefCell::new(None),
                observers: Rc::new(RefCell::new(ObserverSet::default())),
                history: Rc::clone(&history),
                _history_listener: RefCell::new(None),
                navigating: Cell::new(false),
                queued: RefCell::new(VecDeque::new()),
            }),
        };

        router.set_route(&history.current_path());

        let weak = router.downgrade();
        let listener = history.listen(Box::new(move |path: &str| {
            if let Some(router) = weak.upgrade() {
                router.set_route(path);
            }
        }));
        *router.state._history_listener.borrow_mut() = Some(listener);

        info!(routes = router.state.routes.len(), "router ready");
        router
    }

    /// Resolves `path` and records a new history entry for it.
    ///
    /// A navigation requested by an observer while another navigation is in
    /// progress runs after the outer entry is pushed, so the newest history
    /// entry always belongs to the active route.
    pub fn navigate(&self, path: &str) {
        if self.state.navigating.get() {
            debug!(path, "queueing navigation requested during navigation");
            self.state.queued.borrow_mut().push_back(path.to_string());
            return;
        }

        self.state.navigating.set(true);
        self.resolve_and_push(path);
        loop {
            let next = self.state.queued.borrow_mut().pop_front();
            let Some(next) = next else { break };
            self.resolve_and_push(&next);
        }
        self.state.navigating.set(false);
    }

    fn resolve_and_push(&self, path: &str) {
        self.set_route(path);
        self.state.history.push(path);
    }

    /// Resolves `path` and invalidates every dependent observer.
    ///
    /// Does not touch the history. Observers are invalidated even when the
    /// same route matches again.
    pub fn set_route(&self, path: &str) {
        let matched = match_path(path, &self.state.routes).map(Rc::new);
        debug!(path, matched = matched.is_some(), "resolved route");

        *self.state.active.borrow_mut() = matched;
        self.invalidate_observers();
    }

    /// Currently matched route, if any.
    pub fn active_route(&self) -> Option<Rc<MatchedRoute<V>>> {
        self.state.active.borrow().clone()
    }

    /// Whether `snapshot` is still the active route, by identity.
    pub fn is_active(&self, snapshot: &Rc<MatchedRoute<V>>) -> bool {
        self.state
            .active
            .borrow()
            .as_ref()
            .is_some_and(|active| Rc::ptr_eq(active, snapshot))
    }

    pub fn routes(&self) -> &[Arc<Route<V>>] {
        &self.state.routes
    }

    /// Registers a dependent observer, invalidated on every `set_route`.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.state.observers.borrow_mut().insert(Rc::new(callback));
        Subscription::new(id, &self.state.observers)
    }

    pub fn observer_count(&self) -> usize {
        self.state.observers.borrow().len()
    }

    /// Creates a child scope that provides this router to its descendants.
    pub fn provide(&self, parent: &Scope<V>) -> Scope<V> {
        parent.with_router(self.clone())
    }

    pub fn downgrade(&self) -> WeakRouter<V> {
        WeakRouter {
            state: Rc::downgrade(&self.state),
        }
    }

    fn invalidate_observers(&self) {
        let callbacks = self.state.observers.borrow().snapshot();
        for callback in callbacks {
            callback();
        }
    }
}

impl<V: 'static> WeakRouter<V> {
    pub fn upgrade(&self) -> Option<Router<V>> {
        self.state.upgrade().map(|state| Router { state })
    }
}

impl<V: 'static> Clone for Router<V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<V: 'static> Clone for WeakRouter<V> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<V: 'static> fmt::Debug for Router<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.state.routes)
            .field("active", &self.state.active.borrow())
            .field("observers", &self.observer_count())
            .finish()
    }
}
