//! Error types for route table construction and strict resolution

use thiserror::Error;

/// Raised while parsing patterns or assembling a [`RouteTable`](crate::RouteTable)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    #[error("pattern {pattern:?} has an empty segment name")]
    EmptyParamName { pattern: String },

    #[error("pattern {pattern:?} has more than one named segment")]
    MultipleNamedSegments { pattern: String },

    #[error("duplicate route pattern: {0}")]
    DuplicatePattern(String),

    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("root pattern '/' must be a redirect")]
    RootNotRedirect,

    #[error("redirect from {from} has invalid target {target:?}")]
    InvalidRedirect { from: String, target: String },

    #[error("max_redirects must be at least 1")]
    ZeroRedirectBound,
}

/// Non-view outcomes of [`RouteTable::resolve_strict`](crate::RouteTable::resolve_strict)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no route matches {0}")]
    NotFound(String),

    #[error("redirect loop starting at {path} (gave up after {hops} hops)")]
    RedirectLoop { path: String, hops: usize },
}
