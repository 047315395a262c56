/// Path matching against an ordered route list
///
/// Routes are tried strictly in declaration order and the first structural
/// match wins. There is no specificity ranking and no backtracking across
/// routes.

use std::sync::Arc;

use crate::path::normalize_path;
use crate::route::{MatchedRoute, Route};

/// Finds the first route matching `path`.
///
/// The path is normalized before any comparison. Returns `None` when no
/// route matches.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use waypost_router::{match_path, Route};
///
/// let routes = vec![
///     Arc::new(Route::new("/", |_| "home")),
///     Arc::new(Route::new("/users/:id", |_| "user")),
/// ];
///
/// let matched = match_path("/users/42/", &routes).unwrap();
/// assert_eq!(matched.params.get("id"), Some(&"42".to_string()));
/// assert!(match_path("/nope", &routes).is_none());
/// ```
pub fn match_path<V>(path: &str, routes: &[Arc<Route<V>>]) -> Option<MatchedRoute<V>> {
    let path = normalize_path(path);

    routes.iter().find_map(|route| {
        route.pattern().matches(&path).map(|params| MatchedRoute {
            route: Arc::clone(route),
            params,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Params;

    fn routes(paths: &[&'static str]) -> Vec<Arc<Route<&'static str>>> {
        paths
            .iter()
            .map(|&path| Arc::new(Route::new(path, move |_| path)))
            .collect()
    }

    fn matched_handler(path: &str, routes: &[Arc<Route<&'static str>>]) -> Option<&'static str> {
        match_path(path, routes).map(|m| m.route.render(&m.params_as_props()))
    }

    #[test]
    fn test_literal_paths() {
        let routes = routes(&["/"]);
        assert_eq!(matched_handler("/", &routes), Some("/"));
        assert_eq!(matched_handler("", &routes), Some("/"));
        assert_eq!(matched_handler("/foo", &routes), None);
    }

    #[test]
    fn test_incoming_path_is_normalised() {
        let routes = routes(&["/foo/bar"]);
        assert_eq!(matched_handler("foo//bar/", &routes), Some("/foo/bar"));
    }

    #[test]
    fn test_empty_route_list() {
        let routes: Vec<Arc<Route<()>>> = Vec::new();
        assert!(match_path("/", &routes).is_none());
    }

    #[test]
    fn test_match_all_yields_empty_params() {
        let routes = routes(&["/**"]);
        let matched = match_path("/a/b/c", &routes).unwrap();
        assert_eq!(matched.params, Params::new());
    }

    #[test]
    fn test_returns_shared_route() {
        let routes = routes(&["/a", "/b"]);
        let matched = match_path("/b", &routes).unwrap();
        assert!(Arc::ptr_eq(&matched.route, &routes[1]));
    }
}
