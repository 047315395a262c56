/// Segment classification for route path patterns
///
/// A route pattern such as `/users/:id/**` is split on `/` and every segment
/// is classified on its own. Classification is a pure function.

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar for a single path segment. Exactly one named group participates:
///
/// - `param`: a named route parameter (`:id`), the value is the name
/// - `wildcard`: `*` (single segment) or `**` (glob)
/// - `literal`: plain text matched verbatim
static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?::(?<param>[A-Za-z][A-Za-z0-9]*)|(?<wildcard>\*\*?)|(?<literal>[A-Za-z0-9_-]+))$")
        .unwrap()
});

/// Represents the different kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use waypost_router::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about"), SegmentKind::Literal("about"));
/// assert_eq!(classify_segment(":id"), SegmentKind::Param("id"));
/// assert_eq!(classify_segment("*"), SegmentKind::Wildcard);
/// assert_eq!(classify_segment("**"), SegmentKind::Glob);
/// assert_eq!(classify_segment("a.b"), SegmentKind::Unrecognised("a.b"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    /// Named parameter: `:name`
    Param(&'a str),
    /// Single-segment wildcard: `*`
    Wildcard,
    /// Glob wildcard spanning separators: `**`
    Glob,
    /// Alphanumeric, `_` or `-` text
    Literal(&'a str),
    /// Anything the grammar does not know; matched literally
    Unrecognised(&'a str),
}

impl SegmentKind<'_> {
    /// Whether this segment needs a regular expression to match.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Param(_) | Self::Wildcard | Self::Glob)
    }
}

/// Classifies a segment into a pattern kind (pure function)
///
/// The segment is expected to be free of separators.
pub fn classify_segment(segment: &str) -> SegmentKind<'_> {
    let Some(caps) = SEGMENT_RE.captures(segment) else {
        return SegmentKind::Unrecognised(segment);
    };

    if let Some(name) = caps.name("param") {
        return SegmentKind::Param(name.as_str());
    }

    match caps.name("wildcard").map(|m| m.as_str()) {
        Some("**") => SegmentKind::Glob,
        Some(_) => SegmentKind::Wildcard,
        None => SegmentKind::Literal(segment),
    }
}
