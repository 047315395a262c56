// File: waypost/src/link.rs
// Purpose: Same-page navigation directive for clickable elements

use crate::context::{use_router, Scope};
use crate::error::Result;
use crate::router::Router;

/// Element a link directive is attached to.
pub trait LinkElement {
    /// Anchors get their navigation attribute mirrored.
    fn is_anchor(&self) -> bool;

    fn set_href(&mut self, href: &str);
}

/// User interaction that triggers a link.
pub trait NavigationEvent {
    fn prevent_default(&mut self);

    fn stop_immediate_propagation(&mut self);
}

/// Navigates the nearest router to `path` when its element is clicked.
///
/// Works on any element. On anchors the `href` is mirrored too, so that
/// middle-click and "open in new tab" keep working.
pub struct RouterLink<V: 'static> {
    router: Router<V>,
    path: String,
}

impl<V: 'static> RouterLink<V> {
    pub fn new(scope: &Scope<V>, path: impl Into<String>) -> Result<Self> {
        let router = use_router(scope, "RouterLink")?;
        Ok(Self {
            router,
            path: path.into(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Binds the directive to an element.
    pub fn apply<E>(&self, element: &mut E)
    where
        E: LinkElement + ?Sized,
    {
        if element.is_anchor() {
            element.set_href(&self.path);
        }
    }

    /// Handles a click: suppresses the default navigation and routes instead.
    pub fn handle_click<E>(&self, event: &mut E)
    where
        E: NavigationEvent + ?Sized,
    {
        event.prevent_default();
        event.stop_immediate_propagation();

        tracing::debug!(path = %self.path, "link navigation");
        self.router.navigate(&self.path);
    }
}

impl<V: 'static> std::fmt::Debug for RouterLink<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterLink").field("path", &self.path).finish()
    }
}
