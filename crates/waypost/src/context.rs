// File: waypost/src/context.rs
// Purpose: Scope tree through which a router is provided to its consumers

use std::fmt;
use std::rc::Rc;

use crate::error::{Result, RouterError};
use crate::router::Router;

struct ScopeNode<V: 'static> {
    parent: Option<Rc<ScopeNode<V>>>,
    router: Option<Router<V>>,
}

/// A node in the component tree.
///
/// A scope sees the router provided by its nearest ancestor (or itself).
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use waypost::{use_router, MemoryHistory, Route, Router, Scope};
///
/// let root: Scope<&str> = Scope::root();
/// assert!(use_router(&root, "example").is_err());
///
/// let router = Router::new(vec![Route::new("/", |_| "home")], Rc::new(MemoryHistory::default()));
/// let app = router.provide(&root);
/// assert!(use_router(&app.child(), "example").is_ok());
/// ```
pub struct Scope<V: 'static> {
    node: Rc<ScopeNode<V>>,
}

impl<V: 'static> Scope<V> {
    /// A scope with no router above it.
    pub fn root() -> Self {
        Self {
            node: Rc::new(ScopeNode {
                parent: None,
                router: None,
            }),
        }
    }

    /// A descendant scope inheriting whatever this scope provides.
    pub fn child(&self) -> Self {
        Self {
            node: Rc::new(ScopeNode {
                parent: Some(Rc::clone(&self.node)),
                router: None,
            }),
        }
    }

    pub(crate) fn with_router(&self, router: Router<V>) -> Self {
        Self {
            node: Rc::new(ScopeNode {
                parent: Some(Rc::clone(&self.node)),
                router: Some(router),
            }),
        }
    }

    /// The nearest provided router, walking up the tree.
    pub fn router(&self) -> Option<Router<V>> {
        let mut node = Some(&self.node);
        while let Some(current) = node {
            if let Some(router) = &current.router {
                return Some(router.clone());
            }
            node = current.parent.as_ref();
        }
        None
    }
}

impl<V: 'static> Clone for Scope<V> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<V: 'static> fmt::Debug for Scope<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("provides_router", &self.node.router.is_some())
            .field("has_parent", &self.node.parent.is_some())
            .finish()
    }
}

/// Looks up the router for `consumer`, failing when none was provided.
pub fn use_router<V: 'static>(scope: &Scope<V>, consumer: &'static str) -> Result<Router<V>> {
    scope
        .router()
        .ok_or(RouterError::MissingContext { consumer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use waypost_router::Route;

    fn router() -> Router<()> {
        Router::new(vec![Route::new("/", |_| ())], Rc::new(MemoryHistory::default()))
    }

    #[test]
    fn test_missing_context() {
        let scope: Scope<()> = Scope::root().child();
        let err = use_router(&scope, "RouterLink").unwrap_err();
        assert_eq!(err, RouterError::MissingContext { consumer: "RouterLink" });
    }

    #[test]
    fn test_nearest_router_wins() {
        let outer = router();
        let inner = router();

        let scope = outer.provide(&Scope::root());
        let nested = inner.provide(&scope.child()).child();

        let found = use_router(&nested, "test").unwrap();
        assert_eq!(found.observer_count(), 0);
        let _subscription = inner.subscribe(|| {});
        assert_eq!(found.observer_count(), 1);
        assert_eq!(use_router(&scope, "test").unwrap().observer_count(), 0);
    }
}
