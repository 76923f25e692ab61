//! Route entries: a pattern, what it leads to, and per-route options
//!
//! Routes are built with consuming builder methods so a table definition
//! reads top to bottom:
//!
//! ```
//! use chat_router::Route;
//!
//! let thread = Route::view("/messages/:userId", "messages")
//!     .unwrap()
//!     .with_props()
//!     .with_name("thread");
//! assert!(thread.props);
//! ```

use std::collections::HashMap;

use crate::{Params, TableError, Target, ViewId};

pub mod pattern;

pub use pattern::{classify_segment, Pattern, PatternSegment};

/// A single entry of a route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path template, e.g. `/messages/:userId`
    pub pattern: Pattern,
    /// View to activate or path to redirect to
    pub target: Target,
    /// Whether matched named segments are passed to the view
    pub props: bool,
    /// Optional name for reverse lookup via `RouteTable::url_for`
    pub name: Option<String>,
    /// Arbitrary caller-defined data (titles, guards, ...)
    pub metadata: HashMap<String, String>,
}

impl Route {
    fn new(pattern: &str, target: Target) -> Result<Self, TableError> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            target,
            props: false,
            name: None,
            metadata: HashMap::new(),
        })
    }

    /// Creates a route that activates `view`
    pub fn view(pattern: &str, view: impl Into<ViewId>) -> Result<Self, TableError> {
        Self::new(pattern, Target::View(view.into()))
    }

    /// Creates a route that redirects to `to`
    ///
    /// The target may reuse the source's named segment:
    ///
    /// ```
    /// use chat_router::{Params, Route};
    ///
    /// let route = Route::redirect("/chat/:userId", "/messages/:userId").unwrap();
    /// let params = route.matches("/chat/9").unwrap();
    /// assert_eq!(route.redirect_target(&params).as_deref(), Some("/messages/9"));
    /// ```
    pub fn redirect(from: &str, to: impl Into<String>) -> Result<Self, TableError> {
        Self::new(from, Target::Redirect(to.into()))
    }

    /// Passes matched named segments to the view
    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&String> {
        self.metadata.get(key)
    }

    pub fn is_redirect(&self) -> bool {
        self.target.is_redirect()
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.pattern.matches(path)
    }

    /// Redirect target with the matched named segment substituted
    ///
    /// Returns `None` for view routes.
    pub fn redirect_target(&self, params: &Params) -> Option<String> {
        self.target
            .redirect_to()
            .map(|target| substitute_params(target, params))
    }

    /// Checks a redirect target: absolute, and only referencing this route's segment
    pub(crate) fn validate_redirect(&self) -> Result<(), TableError> {
        let Some(target) = self.target.redirect_to() else {
            return Ok(());
        };

        let invalid = || TableError::InvalidRedirect {
            from: self.pattern.to_string(),
            target: target.to_string(),
        };

        let pattern = Pattern::parse(target).map_err(|_| invalid())?;
        match pattern.param_name() {
            Some(name) if self.pattern.param_name() != Some(name) => Err(invalid()),
            _ => Ok(()),
        }
    }
}

/// Replaces `:name` / `{name}` components of `target` with values from `params`
///
/// Components without a matching value are left as written.
pub(crate) fn substitute_params(target: &str, params: &Params) -> String {
    if params.is_empty() {
        return target.to_string();
    }

    target
        .split('/')
        .map(|component| match classify_segment(component) {
            PatternSegment::Named(name) => params
                .get(&name)
                .map(String::as_str)
                .unwrap_or(component),
            PatternSegment::Static(_) => component,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_route_defaults() {
        let route = Route::view("/login", ViewId::AUTH).unwrap();
        assert_eq!(route.pattern.as_str(), "/login");
        assert_eq!(route.target, Target::View(ViewId::new("auth")));
        assert!(!route.props);
        assert!(route.name.is_none());
        assert!(!route.is_redirect());
    }

    #[test]
    fn test_redirect_target_static() {
        let route = Route::redirect("/", "/login").unwrap();
        assert!(route.is_redirect());
        assert_eq!(route.redirect_target(&Params::new()).as_deref(), Some("/login"));
    }

    #[test]
    fn test_redirect_target_on_view_is_none() {
        let route = Route::view("/login", ViewId::AUTH).unwrap();
        assert_eq!(route.redirect_target(&Params::new()), None);
    }

    #[test]
    fn test_validate_redirect() {
        assert!(Route::redirect("/", "/login").unwrap().validate_redirect().is_ok());
        assert!(Route::redirect("/", "login").unwrap().validate_redirect().is_err());
        assert!(Route::redirect("/old/:id", "/new/:id")
            .unwrap()
            .validate_redirect()
            .is_ok());
        assert!(Route::redirect("/old/:id", "/new/:other")
            .unwrap()
            .validate_redirect()
            .is_err());
    }

    #[test]
    fn test_substitute_params_keeps_unknown_placeholders() {
        let params = Params::from([("id".to_string(), "5".to_string())]);
        assert_eq!(substitute_params("/a/{id}/b", &params), "/a/5/b");
        assert_eq!(substitute_params("/a/:other", &params), "/a/:other");
        assert_eq!(substitute_params("/a/:id", &Params::new()), "/a/:id");
    }

    #[test]
    fn test_metadata() {
        let route = Route::view("/messages", ViewId::USER_LIST)
            .unwrap()
            .with_meta("title", "Contacts");
        assert_eq!(route.get_meta("title"), Some(&"Contacts".to_string()));
        assert_eq!(route.get_meta("missing"), None);
    }
}
