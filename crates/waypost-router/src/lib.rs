//! # Waypost Router
//!
//! The route transformation and matching engine behind `waypost`:
//! - Literal routes (`/about`), matched by string comparison
//! - Named parameters (`/users/:id`)
//! - Single-segment wildcards (`/files/*`)
//! - Glob wildcards spanning separators (`/docs/**`)
//! - Raw regular expressions with named groups
//!
//! ## Path Normalization
//!
//! Incoming paths and declared patterns go through the same normalizer:
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Missing leading slash: `path/to` → `/path/to`
//! - Empty input: `""` → `/`
//!
//! ## Matching
//!
//! Routes are tried in declaration order and the first match wins. Each
//! pattern is compiled once, when the [`Route`] is built.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use waypost_router::{match_path, Route};
//!
//! let routes = vec![
//!     Arc::new(Route::new("/:foo", |_| 1)),
//!     Arc::new(Route::new("/foo/:bar", |_| 2)),
//!     Arc::new(Route::new("/:foo/bar", |_| 3)),
//! ];
//!
//! let matched = match_path("/foo/baz", &routes).unwrap();
//! assert_eq!(matched.params.get("bar"), Some(&"baz".to_string()));
//! assert!(match_path("/bar/baz", &routes).is_none());
//! ```

pub mod matcher;
pub mod path;
pub mod route;

pub use matcher::match_path;
pub use path::{is_canonical_path, normalize_path};
pub use route::{
    classify_segment, compile, compile_all, CompiledPattern, Handler, Loader, MatchedRoute,
    Params, Props, Route, RoutePath, SegmentKind,
};
