// File: waypost/src/lib.rs
// Purpose: Main entry point for the waypost client-side router

//! # waypost
//!
//! Client-side routing for component UI libraries.
//!
//! The router compiles its routes once, resolves the current history path,
//! and re-resolves on every navigation or history change. Consumers that
//! render the active route subscribe to it and are invalidated on every
//! resolution.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use futures::executor::LocalPool;
//! use waypost::{MemoryHistory, Route, Router, RouterLink, RouterOutlet, Scope};
//!
//! // 1. Declare routes in precedence order
//! let history = Rc::new(MemoryHistory::new("/"));
//! let router = Router::new(
//!     vec![
//!         Route::new("/", |_| "home".to_string()),
//!         Route::new("/users/:id", |props| format!("user {}", props["id"].as_str().unwrap_or(""))),
//!     ],
//!     history,
//! );
//!
//! // 2. Provide it to the component tree
//! let app = router.provide(&Scope::root());
//!
//! // 3. Render the active route and link to others
//! let pool = LocalPool::new();
//! let mut outlet = RouterOutlet::new(&app, pool.spawner(), || {}).unwrap();
//! assert_eq!(outlet.render().as_deref(), Some("home"));
//!
//! struct Click;
//! impl waypost::NavigationEvent for Click {
//!     fn prevent_default(&mut self) {}
//!     fn stop_immediate_propagation(&mut self) {}
//! }
//!
//! RouterLink::new(&app, "/users/7").unwrap().handle_click(&mut Click);
//! assert_eq!(outlet.render().as_deref(), Some("user 7"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod link;
pub mod logging;
mod observer;
pub mod outlet;
pub mod router;
pub mod state;

// Re-export main types
pub use config::{Config, LoggingConfig, RouterConfig};
pub use context::{use_router, Scope};
pub use error::{Result, RouterError};
pub use history::{History, HistoryListener, HistoryListeners, MemoryHistory};
pub use link::{LinkElement, NavigationEvent, RouterLink};
pub use observer::Subscription;
pub use outlet::{PropsSlot, RouterOutlet};
pub use router::{Router, WeakRouter};
pub use state::State;

pub use waypost_router::{
    compile, match_path, normalize_path, CompiledPattern, MatchedRoute, Params, Props, Route,
    RoutePath,
};
