/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is already in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
/// - Must not carry leading or trailing whitespace
///
/// # Examples
///
/// ```
/// use waypost_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/about"));
/// assert!(is_canonical_path("/users/123"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("about")); // Missing leading /
/// assert!(!is_canonical_path("/about/")); // Trailing /
/// assert!(!is_canonical_path("/about//page")); // Double //
/// assert!(!is_canonical_path(" /about")); // Whitespace
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.trim() != path || path.contains("//") {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical and
/// `Cow::Owned` when anything had to change.
///
/// - Surrounding whitespace is trimmed: ` /about ` → `/about`
/// - Repeated separators collapse: `/path//to` → `/path/to`
/// - Trailing separators are dropped: `/path/` → `/path`
/// - A leading separator is added: `path/to` → `/path/to`
/// - Empty input and separator-only input become the root: `""` → `/`
///
/// The function is total and idempotent.
///
/// # Examples
///
/// ```
/// use waypost_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/about");
/// assert!(matches!(path, Cow::Borrowed("/about")));
///
/// assert_eq!(normalize_path("foo/bar/baz/"), "/foo/bar/baz");
/// assert_eq!(normalize_path("//foo"), "/foo");
/// assert_eq!(normalize_path("///"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .trim()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    // A segment may end in whitespace once its trailing separator is gone;
    // trimming it here keeps normalization idempotent.
    let joined = joined.trim_end_matches(|c: char| c == '/' || c.is_whitespace());

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

/// Splits a normalized path into its segments, skipping the root.
///
/// ```
/// use waypost_router::path::segments;
///
/// assert_eq!(segments("/a/b").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(segments("/").count(), 0);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
