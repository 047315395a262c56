/// Compilation of declared route paths into matchers
///
/// String patterns are normalized, split into segments and classified. A
/// pattern without dynamic segments stays a plain string so matching is a
/// string comparison; anything else becomes one anchored regular expression.

use std::collections::HashSet;

use regex::Regex;
use tracing::{error, warn};

use super::pattern::{classify_segment, SegmentKind};
use super::{CompiledPattern, RoutePath};
use crate::path::normalize_path;

const PARAM_CAPTURE: &str = "[^/]+";
const WILDCARD_CAPTURE: &str = "([^/]+)";
const GLOB_CAPTURE: &str = "(.+)";

/// Compiles a declared route path into a [`CompiledPattern`].
///
/// Regular expressions pass through untouched; their named groups become the
/// route parameters. Compilation is deterministic and never fails.
///
/// # Examples
///
/// ```
/// use waypost_router::{compile, CompiledPattern};
///
/// assert_eq!(compile("/"), CompiledPattern::Literal("/".to_string()));
/// assert_eq!(compile("/foo/"), CompiledPattern::Literal("/foo".to_string()));
/// assert_eq!(compile("/**"), CompiledPattern::MatchAll);
/// assert_eq!(compile("/:bar").to_string(), r"^/(?<bar>[^/]+)/?$");
/// ```
pub fn compile(path: impl Into<RoutePath>) -> CompiledPattern {
    match path.into() {
        RoutePath::Regex(regex) => CompiledPattern::from_regex(regex),
        RoutePath::Path(path) => compile_path(&path),
    }
}

fn compile_path(path: &str) -> CompiledPattern {
    let normalized = normalize_path(path);
    let segment_path = &normalized[1..];

    if segment_path.is_empty() {
        return CompiledPattern::Literal("/".to_string());
    }
    if segment_path == "*" || segment_path == "**" {
        return CompiledPattern::MatchAll;
    }

    let kinds: Vec<SegmentKind<'_>> = segment_path
        .split('/')
        .map(|segment| {
            let segment = segment.trim();
            let kind = classify_segment(segment);
            if let SegmentKind::Unrecognised(text) = kind {
                warn!(segment = text, pattern = path, "unrecognised route path segment, matching it literally");
            }
            kind
        })
        .collect();

    if !kinds.iter().any(SegmentKind::is_dynamic) {
        let literal = kinds
            .iter()
            .filter_map(|kind| match *kind {
                SegmentKind::Literal(text) | SegmentKind::Unrecognised(text) => Some(text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        return CompiledPattern::Literal(format!("/{}", literal));
    }

    let source = regex_source(path, &kinds);
    match Regex::new(&source) {
        Ok(regex) => CompiledPattern::from_regex(regex),
        Err(err) => {
            error!(pattern = path, %err, "route pattern rejected by the regex engine, falling back to a literal match");
            CompiledPattern::Literal(normalized.into_owned())
        }
    }
}

/// Builds `^/seg1/seg2/.../?$` from classified segments.
fn regex_source(path: &str, kinds: &[SegmentKind<'_>]) -> String {
    let mut seen = HashSet::new();

    let fragments: Vec<String> = kinds
        .iter()
        .map(|kind| match *kind {
            SegmentKind::Param(name) if seen.insert(name) => {
                format!("(?<{}>{})", name, PARAM_CAPTURE)
            }
            SegmentKind::Param(name) => {
                warn!(param = name, pattern = path, "duplicate route parameter, later occurrence is not captured by name");
                WILDCARD_CAPTURE.to_string()
            }
            SegmentKind::Wildcard => WILDCARD_CAPTURE.to_string(),
            SegmentKind::Glob => GLOB_CAPTURE.to_string(),
            SegmentKind::Literal(text) => text.to_string(),
            SegmentKind::Unrecognised(text) => regex::escape(text),
        })
        .collect();

    format!("^/{}/?$", fragments.join("/"))
}

/// Compiles an ordered list of declared paths, keeping declaration order.
pub fn compile_all<I, P>(paths: I) -> Vec<CompiledPattern>
where
    I: IntoIterator<Item = P>,
    P: Into<RoutePath>,
{
    paths.into_iter().map(compile).collect()
}
