//! Pattern parsing and matching for route templates
//!
//! A pattern is a literal path with at most one named segment. Named segments
//! are written `:name` (canonical) or `{name}`; both parse to the same
//! [`PatternSegment::Named`].
//!
//! All functions are **pure**: same input → same output, no side effects.

use std::fmt;
use std::str::FromStr;

use crate::{Params, TableError};

/// One `/`-separated piece of a route pattern
///
/// # Examples
///
/// ```
/// use chat_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("login"), PatternSegment::Static("login".into()));
/// assert_eq!(classify_segment(":userId"), PatternSegment::Named("userId".into()));
/// assert_eq!(classify_segment("{userId}"), PatternSegment::Named("userId".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    /// Matches exactly this text (case-sensitive)
    Static(String),
    /// Matches any single non-empty path component
    Named(String),
}

impl PatternSegment {
    fn write_canonical(&self, out: &mut String) {
        match self {
            PatternSegment::Static(text) => out.push_str(text),
            PatternSegment::Named(name) => {
                out.push(':');
                out.push_str(name);
            }
        }
    }
}

/// Classifies a single segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. `:name` → named
/// 2. `{name}` → named
/// 3. anything else → static
pub fn classify_segment(segment: &str) -> PatternSegment {
    if let Some(name) = segment.strip_prefix(':') {
        return PatternSegment::Named(name.to_string());
    }

    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(name) => PatternSegment::Named(name.to_string()),
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// A parsed route pattern such as `/login` or `/messages/:userId`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    canonical: String,
    segments: Vec<PatternSegment>,
}

impl Pattern {
    /// Parses a pattern, enforcing the leading slash and the single-named-segment rule
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::route::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/messages/{userId}").unwrap();
    /// assert_eq!(pattern.as_str(), "/messages/:userId");
    /// assert_eq!(pattern.param_name(), Some("userId"));
    ///
    /// assert!(Pattern::parse("messages").is_err());
    /// assert!(Pattern::parse("/a/:x/:y").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, TableError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| TableError::MissingLeadingSlash(pattern.to_string()))?;

        let segments: Vec<PatternSegment> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').map(classify_segment).collect()
        };

        let mut named = segments.iter().filter_map(|seg| match seg {
            PatternSegment::Named(name) => Some(name),
            PatternSegment::Static(_) => None,
        });

        if let Some(name) = named.next() {
            if name.is_empty() {
                return Err(TableError::EmptyParamName {
                    pattern: pattern.to_string(),
                });
            }
            if named.next().is_some() {
                return Err(TableError::MultipleNamedSegments {
                    pattern: pattern.to_string(),
                });
            }
        }

        let mut canonical = String::with_capacity(pattern.len());
        for seg in &segments {
            canonical.push('/');
            seg.write_canonical(&mut canonical);
        }
        if canonical.is_empty() {
            canonical.push('/');
        }

        Ok(Self {
            canonical,
            segments,
        })
    }

    /// Canonical text form (`{name}` rewritten to `:name`)
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Name of the named segment, if the pattern has one
    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|seg| match seg {
            PatternSegment::Named(name) => Some(name.as_str()),
            PatternSegment::Static(_) => None,
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Matches a path against this pattern
    ///
    /// Empty path components are kept, so `/messages/` is two components
    /// (`messages` and the empty string) and the empty one never satisfies a
    /// named segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::route::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/messages/:userId").unwrap();
    /// let params = pattern.matches("/messages/42").unwrap();
    /// assert_eq!(params.get("userId").map(String::as_str), Some("42"));
    ///
    /// assert!(pattern.matches("/messages/").is_none());
    /// assert!(pattern.matches("/Messages/42").is_none());
    /// ```
    pub fn matches(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/')?;

        if self.is_root() {
            return rest.is_empty().then(Params::new);
        }

        let components: Vec<&str> = rest.split('/').collect();
        if components.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(components)
            .try_fold(Params::new(), |mut params, (seg, component)| match seg {
                PatternSegment::Static(text) => (text == component).then_some(params),
                PatternSegment::Named(name) => {
                    if component.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), component.to_string());
                    Some(params)
                }
            })
    }

    /// Builds a concrete path by substituting the named segment
    ///
    /// Returns `None` when the named segment is missing from `params`, empty,
    /// or would span more than one path component.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::route::pattern::Pattern;
    /// use chat_router::Params;
    ///
    /// let pattern = Pattern::parse("/messages/:userId").unwrap();
    /// let params = Params::from([("userId".to_string(), "7".to_string())]);
    /// assert_eq!(pattern.generate(&params).as_deref(), Some("/messages/7"));
    /// assert_eq!(pattern.generate(&Params::new()), None);
    /// ```
    pub fn generate(&self, params: &Params) -> Option<String> {
        if self.is_root() {
            return Some("/".to_string());
        }

        self.segments
            .iter()
            .try_fold(String::new(), |mut url, seg| {
                url.push('/');
                match seg {
                    PatternSegment::Static(text) => url.push_str(text),
                    PatternSegment::Named(name) => {
                        let value = params.get(name)?;
                        if value.is_empty() || value.contains('/') {
                            return None;
                        }
                        url.push_str(value);
                    }
                }
                Some(url)
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Pattern {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
