// File: src/config.rs
// Purpose: Route table configuration parsing from routes.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chat::{LOGIN_PATH, ROOT_PATH, THREAD_PATTERN, USER_LIST_PATH};
use crate::{Route, RouteTable, ViewId, DEFAULT_MAX_REDIRECTS};

/// Default config file looked up by [`Config::load_default`]
pub const DEFAULT_CONFIG_FILE: &str = "routes.toml";

/// Route table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

/// Resolver settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Redirects followed before reporting a loop (default: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Whether `/` may only be a redirect (default: true)
    #[serde(default = "default_true")]
    pub root_redirect_only: bool,
}

/// One `[[routes]]` entry; exactly one of `view` / `redirect` must be set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    #[serde(default)]
    pub props: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_true() -> bool {
    true
}

fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            path: ROOT_PATH.to_string(),
            redirect: Some(LOGIN_PATH.to_string()),
            ..Default::default()
        },
        RouteConfig {
            path: LOGIN_PATH.to_string(),
            view: Some(ViewId::AUTH.to_string()),
            name: Some("login".to_string()),
            ..Default::default()
        },
        RouteConfig {
            path: USER_LIST_PATH.to_string(),
            view: Some(ViewId::USER_LIST.to_string()),
            name: Some("users".to_string()),
            ..Default::default()
        },
        RouteConfig {
            path: THREAD_PATTERN.to_string(),
            view: Some(ViewId::MESSAGES.to_string()),
            props: true,
            name: Some("thread".to_string()),
            ..Default::default()
        },
    ]
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_redirects: default_max_redirects(),
            root_redirect_only: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            router: RouterConfig::default(),
            routes: default_routes(),
        }
    }
}

impl RouteConfig {
    /// Converts this entry into a [`Route`]
    pub fn to_route(&self) -> Result<Route> {
        let route = match (&self.view, &self.redirect) {
            (Some(view), None) => Route::view(&self.path, view.as_str()),
            (None, Some(to)) => Route::redirect(&self.path, to.as_str()),
            (Some(_), Some(_)) => bail!("route {} sets both `view` and `redirect`", self.path),
            (None, None) => bail!("route {} needs either `view` or `redirect`", self.path),
        }
        .with_context(|| format!("Invalid route pattern: {}", self.path))?;

        let route = if self.props { route.with_props() } else { route };

        Ok(match &self.name {
            Some(name) => route.with_name(name.as_str()),
            None => route,
        })
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default chat table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// Builds the immutable route table described by this config
    pub fn into_table(self) -> Result<RouteTable> {
        let routes = self
            .routes
            .iter()
            .map(RouteConfig::to_route)
            .collect::<Result<Vec<_>>>()?;

        RouteTable::builder()
            .with_max_redirects(self.router.max_redirects)
            .with_root_redirect_only(self.router.root_redirect_only)
            .with_routes(routes)
            .build()
            .context("Invalid route table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resolution;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.router.max_redirects, 10);
        assert!(config.router.root_redirect_only);
        assert_eq!(config.routes.len(), 4);
        assert_eq!(config.routes[0].redirect.as_deref(), Some("/login"));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("   \n").unwrap();
        assert_eq!(config.routes, default_routes());
    }

    #[test]
    fn test_default_config_matches_chat_table() {
        let from_config = Config::default().into_table().unwrap();
        let chat = RouteTable::chat().unwrap();
        assert_eq!(from_config.routes(), chat.routes());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/routes.toml").unwrap();
        assert_eq!(config.routes.len(), 4);
    }

    #[test]
    fn test_custom_routes() {
        let toml = r#"
            [router]
            max_redirects = 3

            [[routes]]
            path = "/"
            redirect = "/inbox"

            [[routes]]
            path = "/inbox"
            view = "inbox"

            [[routes]]
            path = "/inbox/{threadId}"
            view = "thread"
            props = true
        "#;
        let table = Config::from_toml(toml).unwrap().into_table().unwrap();
        assert_eq!(table.max_redirects(), 3);
        assert_eq!(table.resolve("/").view_id().map(|v| v.as_str()), Some("inbox"));
        assert_eq!(table.resolve("/inbox/9").param("threadId"), Some("9"));
    }

    #[test]
    fn test_router_section_only_keeps_default_routes() {
        let config = Config::from_toml("[router]\nmax_redirects = 2\n").unwrap();
        assert_eq!(config.routes.len(), 4);
        let table = config.into_table().unwrap();
        assert!(table.resolve("/login").is_view());
    }

    #[test]
    fn test_route_needs_exactly_one_target() {
        let both = RouteConfig {
            path: "/x".into(),
            view: Some("x".into()),
            redirect: Some("/y".into()),
            ..Default::default()
        };
        assert!(both.to_route().is_err());

        let neither = RouteConfig {
            path: "/x".into(),
            ..Default::default()
        };
        assert!(neither.to_route().is_err());
    }

    #[test]
    fn test_root_view_rejected_by_default() {
        let toml = r#"
            [[routes]]
            path = "/"
            view = "home"
        "#;
        let err = Config::from_toml(toml).unwrap().into_table().unwrap_err();
        assert!(format!("{:#}", err).contains("must be a redirect"));
    }

    #[test]
    fn test_root_view_allowed_when_disabled() {
        let toml = r#"
            [router]
            root_redirect_only = false

            [[routes]]
            path = "/"
            view = "home"
        "#;
        let table = Config::from_toml(toml).unwrap().into_table().unwrap();
        assert!(matches!(table.resolve("/"), Resolution::View { .. }));
    }
}
