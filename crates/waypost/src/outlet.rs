// File: waypost/src/outlet.rs
// Purpose: Renders the active route, loading its props when it has a loader

use std::fmt;
use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};
use tracing::{debug, error};
use waypost_router::{MatchedRoute, Props};

use crate::context::{use_router, Scope};
use crate::error::Result;
use crate::observer::Subscription;
use crate::router::Router;
use crate::state::State;

/// Props of the route an outlet is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum PropsSlot {
    Loading,
    Ready(Props),
}

/// Renders the active route of the nearest provided router.
///
/// The outlet is a dependent observer: `invalidate` runs whenever the router
/// re-resolves and whenever a load completes, and the host should call
/// [`RouterOutlet::render`] again in response.
///
/// Loads run on the supplied spawner. A load that completes after the active
/// route changed is discarded.
pub struct RouterOutlet<V: 'static> {
    router: Router<V>,
    current: Option<Rc<MatchedRoute<V>>>,
    props: State<PropsSlot>,
    spawner: Box<dyn LocalSpawn>,
    _subscription: Subscription,
}

impl<V: 'static> RouterOutlet<V> {
    pub fn new<S, F>(scope: &Scope<V>, spawner: S, invalidate: F) -> Result<Self>
    where
        S: LocalSpawn + 'static,
        F: Fn() + 'static,
    {
        let router = use_router(scope, "RouterOutlet")?;
        let invalidate: Rc<dyn Fn()> = Rc::new(invalidate);

        let subscription = router.subscribe({
            let invalidate = Rc::clone(&invalidate);
            move || invalidate()
        });

        Ok(Self {
            router,
            current: None,
            props: State::with_invalidator(PropsSlot::Loading, invalidate),
            spawner: Box::new(spawner),
            _subscription: subscription,
        })
    }

    /// Renders the active route, or `None` when nothing matched or the
    /// route's props are still loading.
    pub fn render(&mut self) -> Option<V> {
        let route = self.router.active_route()?;

        let is_current = self
            .current
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, &route));
        if !is_current {
            self.current = Some(Rc::clone(&route));
            self.begin_load(&route);
        }

        match self.props.get() {
            PropsSlot::Loading => None,
            PropsSlot::Ready(props) => Some(route.route.render(&props)),
        }
    }

    pub fn props(&self) -> PropsSlot {
        self.props.get()
    }

    fn begin_load(&self, route: &Rc<MatchedRoute<V>>) {
        let Some(loader) = route.route.loader() else {
            self.props.replace_quietly(PropsSlot::Ready(route.params_as_props()));
            return;
        };

        self.props.replace_quietly(PropsSlot::Loading);

        let pending = loader(&route.params);
        let initiator = Rc::clone(route);
        let router = self.router.downgrade();
        let props = self.props.clone();

        let task = async move {
            let loaded = pending.await;
            let still_active = router
                .upgrade()
                .is_some_and(|router| router.is_active(&initiator));

            if still_active {
                props.set(PropsSlot::Ready(loaded));
            } else {
                debug!(params = ?initiator.params, "discarding props loaded for a superseded route");
            }
        };

        if let Err(err) = self.spawner.spawn_local(task) {
            error!(%err, "failed to spawn route loader");
        }
    }
}

impl<V: 'static> fmt::Debug for RouterOutlet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterOutlet")
            .field("current", &self.current)
            .field("props", &self.props)
            .finish()
    }
}
