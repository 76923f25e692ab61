//! Path utilities for callers that receive raw navigation input
//!
//! The resolver expects a normalized path (leading slash, no query string,
//! no fragment) and does not normalize on its own: `/messages/` and
//! `/messages` are different paths to it. These helpers let a caller opt in
//! to cleaning up user-typed or history-supplied locations first.
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`, `\`, `?` or `#`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use chat_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/messages/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("login"));
/// assert!(!is_valid_path("/messages/"));
/// assert!(!is_valid_path("/login?next=/messages"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains(['\\', '?', '#']) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Drops everything from the first `?` or `#` onwards
///
/// # Examples
///
/// ```
/// use chat_router::path::strip_query_and_fragment;
///
/// assert_eq!(strip_query_and_fragment("/login?next=/messages"), "/login");
/// assert_eq!(strip_query_and_fragment("/messages/7#latest"), "/messages/7");
/// assert_eq!(strip_query_and_fragment("/messages"), "/messages");
/// ```
pub fn strip_query_and_fragment(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |idx| &path[..idx])
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Query and fragment: `/login?x=1` → `/login`
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
///
/// # Examples
///
/// ```
/// use chat_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/messages");
/// assert!(matches!(path, Cow::Borrowed("/messages")));
///
/// assert_eq!(normalize_path("/messages/"), "/messages");
/// assert_eq!(normalize_path("\\messages\\42"), "/messages/42");
/// assert_eq!(normalize_path("/login?next=%2Fmessages"), "/login");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let path = strip_query_and_fragment(path);
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}
