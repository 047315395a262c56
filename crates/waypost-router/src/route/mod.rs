/// Route data model
///
/// A [`Route`] pairs a compiled path matcher with the handler that renders it
/// and an optional async loader that turns extracted params into props.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture};
use regex::Regex;

pub mod compile;
pub mod pattern;

pub use compile::{compile, compile_all};
pub use pattern::{classify_segment, SegmentKind};

/// Parameters extracted from a matched path, keyed by name.
pub type Params = HashMap<String, String>;

/// Props handed to a route handler.
pub type Props = serde_json::Value;

/// Renders a route's view from its resolved props.
pub type Handler<V> = Arc<dyn Fn(&Props) -> V + Send + Sync>;

/// Derives props from extracted params, possibly asynchronously.
pub type Loader = Arc<dyn Fn(&Params) -> LocalBoxFuture<'static, Props> + Send + Sync>;

/// A declared route path: pattern syntax or a raw regular expression.
#[derive(Debug, Clone)]
pub enum RoutePath {
    Path(String),
    Regex(Regex),
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        RoutePath::Path(path.to_string())
    }
}

impl From<String> for RoutePath {
    fn from(path: String) -> Self {
        RoutePath::Path(path)
    }
}

impl From<Regex> for RoutePath {
    fn from(regex: Regex) -> Self {
        RoutePath::Regex(regex)
    }
}

/// A compiled route matcher.
///
/// Produced once per route and never re-derived from the declared path.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Matches one exact normalized path.
    Literal(String),
    /// Matches every path.
    MatchAll,
    /// Matches when the expression does; named groups become params.
    Regex {
        regex: Regex,
        param_names: Vec<String>,
    },
}

impl CompiledPattern {
    /// Wraps an expression, recording its named capture groups.
    pub fn from_regex(regex: Regex) -> Self {
        let param_names = regex.capture_names().flatten().map(str::to_string).collect();
        CompiledPattern::Regex { regex, param_names }
    }

    /// Tests a normalized path, returning the extracted params on success.
    ///
    /// Named groups that did not participate in the match are left out.
    pub fn matches(&self, path: &str) -> Option<Params> {
        match self {
            CompiledPattern::MatchAll => Some(Params::new()),
            CompiledPattern::Literal(literal) => (literal == path).then(Params::new),
            CompiledPattern::Regex { regex, param_names } => {
                let caps = regex.captures(path)?;
                Some(
                    param_names
                        .iter()
                        .filter_map(|name| {
                            caps.name(name).map(|m| (name.clone(), m.as_str().to_string()))
                        })
                        .collect(),
                )
            }
        }
    }

    /// Whether matching requires regex evaluation.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, CompiledPattern::Regex { .. })
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompiledPattern::Literal(a), CompiledPattern::Literal(b)) => a == b,
            (CompiledPattern::MatchAll, CompiledPattern::MatchAll) => true,
            (CompiledPattern::Regex { regex: a, .. }, CompiledPattern::Regex { regex: b, .. }) => {
                a.as_str() == b.as_str()
            }
            _ => false,
        }
    }
}

impl Eq for CompiledPattern {}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledPattern::Literal(literal) => f.write_str(literal),
            CompiledPattern::MatchAll => f.write_str("*"),
            CompiledPattern::Regex { regex, .. } => f.write_str(regex.as_str()),
        }
    }
}

/// A route: compiled pattern, render handler and optional loader.
///
/// # Examples
///
/// ```
/// use waypost_router::{CompiledPattern, Route};
///
/// let route = Route::new("/users/:id", |props| format!("user {}", props["id"]));
/// assert!(route.pattern().is_dynamic());
///
/// let home = Route::new("/", |_| "home".to_string());
/// assert_eq!(home.pattern(), &CompiledPattern::Literal("/".to_string()));
/// ```
pub struct Route<V> {
    pattern: CompiledPattern,
    handler: Handler<V>,
    loader: Option<Loader>,
}

impl<V> Route<V> {
    /// Creates a route, compiling its path immediately.
    pub fn new<F>(path: impl Into<RoutePath>, handler: F) -> Self
    where
        F: Fn(&Props) -> V + Send + Sync + 'static,
    {
        Self {
            pattern: compile(path),
            handler: Arc::new(handler),
            loader: None,
        }
    }

    /// Attaches a loader deriving props from the extracted params.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost_router::Route;
    /// use serde_json::json;
    ///
    /// let route = Route::new("/posts/:slug", |props| props["title"].to_string())
    ///     .with_loader(|params| {
    ///         let slug = params["slug"].clone();
    ///         async move { json!({ "title": slug }) }
    ///     });
    /// assert!(route.loader().is_some());
    /// ```
    pub fn with_loader<F, Fut>(mut self, loader: F) -> Self
    where
        F: Fn(&Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Props> + 'static,
    {
        self.loader = Some(Arc::new(move |params: &Params| loader(params).boxed_local()));
        self
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn loader(&self) -> Option<&Loader> {
        self.loader.as_ref()
    }

    /// Runs the handler with resolved props.
    pub fn render(&self, props: &Props) -> V {
        (self.handler)(props)
    }
}

impl<V> Clone for Route<V> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            handler: Arc::clone(&self.handler),
            loader: self.loader.clone(),
        }
    }
}

impl<V> fmt::Debug for Route<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}

/// Result of matching a path against a route list
pub struct MatchedRoute<V> {
    /// The matched route
    pub route: Arc<Route<V>>,
    /// Extracted parameters from the path
    pub params: Params,
}

impl<V> MatchedRoute<V> {
    /// Props used when the route has no loader: the params as a JSON object.
    pub fn params_as_props(&self) -> Props {
        Props::Object(
            self.params
                .iter()
                .map(|(key, value)| (key.clone(), Props::String(value.clone())))
                .collect(),
        )
    }
}

impl<V> Clone for MatchedRoute<V> {
    fn clone(&self) -> Self {
        Self {
            route: Arc::clone(&self.route),
            params: self.params.clone(),
        }
    }
}

impl<V> PartialEq for MatchedRoute<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.route, &other.route) && self.params == other.params
    }
}

impl<V> fmt::Debug for MatchedRoute<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchedRoute")
            .field("route", &self.route)
            .field("params", &self.params)
            .finish()
    }
}
