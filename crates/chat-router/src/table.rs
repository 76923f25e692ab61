//! Immutable route table and the resolver over it

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::route::substitute_params;
use crate::{
    ErrorReason, Navigation, Params, ResolveError, Resolution, ResolvedView, Route, TableError,
    Target, ViewId,
};

/// Upper bound on redirects followed by a single resolution
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// A route that matched a path, with the values of its named segment
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: Params,
}

/// Ordered, validated set of routes
///
/// Constructed once through [`RouteTableBuilder`] and never mutated
/// afterwards, so a table can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use chat_router::{Resolution, Route, RouteTable};
///
/// let table = RouteTable::builder()
///     .with_route(Route::redirect("/", "/home").unwrap())
///     .with_route(Route::view("/home", "home").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(table.resolve("/"), table.resolve("/home"));
/// assert_eq!(table.resolve("/nope"), Resolution::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    max_redirects: usize,
}

/// Collects routes and checks table invariants on [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    max_redirects: usize,
    root_redirect_only: bool,
}

impl Default for RouteTableBuilder {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            root_redirect_only: false,
        }
    }
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route; declaration order is match priority
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        self.routes.extend(routes);
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Rejects tables whose `/` entry is a view
    pub fn with_root_redirect_only(mut self, enabled: bool) -> Self {
        self.root_redirect_only = enabled;
        self
    }

    /// Validates and freezes the table
    ///
    /// # Errors
    ///
    /// - [`TableError::ZeroRedirectBound`] when `max_redirects` is 0
    /// - [`TableError::DuplicatePattern`] / [`TableError::DuplicateName`]
    /// - [`TableError::InvalidRedirect`] for relative targets or targets naming
    ///   a segment the source pattern does not capture
    /// - [`TableError::RootNotRedirect`] when root redirects are required
    pub fn build(self) -> Result<RouteTable, TableError> {
        if self.max_redirects == 0 {
            return Err(TableError::ZeroRedirectBound);
        }

        self.validate()?;

        debug!(
            routes = self.routes.len(),
            max_redirects = self.max_redirects,
            "route table built"
        );

        Ok(RouteTable {
            routes: self.routes,
            max_redirects: self.max_redirects,
        })
    }

    fn validate(&self) -> Result<(), TableError> {
        let mut patterns = HashSet::new();
        let mut names = HashSet::new();

        for route in &self.routes {
            if !patterns.insert(route.pattern.as_str()) {
                return Err(TableError::DuplicatePattern(route.pattern.to_string()));
            }

            if let Some(name) = &route.name {
                if !names.insert(name.as_str()) {
                    return Err(TableError::DuplicateName(name.clone()));
                }
            }

            if self.root_redirect_only && route.pattern.is_root() && !route.is_redirect() {
                return Err(TableError::RootNotRedirect);
            }

            route.validate_redirect()?;
        }

        Ok(())
    }
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// First route matching `path`, in declaration order
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// Resolves a path, following redirects up to the hop bound
    ///
    /// Pure with respect to the table: the same path always gives the same
    /// outcome. `NotFound` and redirect-loop errors are returned, never raised.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.trace(path).outcome
    }

    /// Resolves a single step without following a redirect
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::{Resolution, RouteTable};
    ///
    /// let table = RouteTable::chat().unwrap();
    /// assert_eq!(
    ///     table.resolve_step("/"),
    ///     Resolution::Redirect { target: "/login".into() }
    /// );
    /// ```
    pub fn resolve_step(&self, path: &str) -> Resolution {
        let Some(RouteMatch { route, params }) = self.match_route(path) else {
            trace!(path, "no route matches");
            return Resolution::NotFound;
        };

        match &route.target {
            Target::View(view_id) => {
                debug!(path, pattern = %route.pattern, view = %view_id, "matched view");
                Resolution::View {
                    view_id: view_id.clone(),
                    params: if route.props { params } else { Params::new() },
                }
            }
            Target::Redirect(to) => Resolution::Redirect {
                target: substitute_params(to, &params),
            },
        }
    }

    /// Resolves a path and records every path visited
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::RouteTable;
    ///
    /// let table = RouteTable::chat().unwrap();
    /// let nav = table.trace("/");
    /// assert_eq!(nav.chain, vec!["/", "/login"]);
    /// assert_eq!(nav.hops(), 1);
    /// ```
    pub fn trace(&self, path: &str) -> Navigation {
        let mut chain = vec![path.to_string()];

        loop {
            let current = chain.last().map(String::as_str).unwrap_or(path);

            match self.resolve_step(current) {
                Resolution::Redirect { target } => {
                    if chain.len() > self.max_redirects {
                        warn!(
                            path,
                            hops = self.max_redirects,
                            "redirect bound exceeded, giving up"
                        );
                        return Navigation {
                            chain,
                            outcome: Resolution::Error {
                                reason: ErrorReason::RedirectLoop,
                            },
                        };
                    }

                    debug!(from = current, to = %target, "following redirect");
                    chain.push(target);
                }
                outcome => return Navigation { chain, outcome },
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but as a `Result`
    pub fn resolve_strict(&self, path: &str) -> Result<ResolvedView, ResolveError> {
        let nav = self.trace(path);
        let hops = nav.hops();

        match nav.outcome {
            Resolution::View { view_id, params } => Ok(ResolvedView { view_id, params }),
            Resolution::NotFound => Err(ResolveError::NotFound(
                nav.chain.last().cloned().unwrap_or_else(|| path.to_string()),
            )),
            Resolution::Redirect { .. } | Resolution::Error { .. } => {
                Err(ResolveError::RedirectLoop {
                    path: path.to_string(),
                    hops,
                })
            }
        }
    }

    pub fn get_route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.name.as_deref() == Some(name))
    }

    /// Builds a path for a named route
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::{Params, RouteTable};
    ///
    /// let table = RouteTable::chat().unwrap();
    /// let params = Params::from([("userId".to_string(), "42".to_string())]);
    /// assert_eq!(table.url_for("thread", &params).as_deref(), Some("/messages/42"));
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Option<String> {
        self.get_route_by_name(name)
            .and_then(|route| route.pattern.generate(params))
    }

    /// Convenience wrapper over [`url_for`](Self::url_for) taking tuples
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let params: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &params)
    }

    /// Builds a path that activates `view_id` with the given params
    ///
    /// Takes the first view route for `view_id` whose named segment, if any,
    /// is supplied by `params`.
    pub fn href(&self, view_id: &ViewId, params: &Params) -> Option<String> {
        self.routes
            .iter()
            .filter(|route| route.target.view_id() == Some(view_id))
            .find_map(|route| route.pattern.generate(params))
    }
}
