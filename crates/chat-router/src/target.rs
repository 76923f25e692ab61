//! Route targets: either an opaque view identifier or a redirect

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token naming a renderable view
///
/// The router never instantiates views; it hands this token to the caller,
/// which decides what to render for it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    /// Login / sign-up screen
    pub const AUTH: &'static str = "auth";
    /// List of users to start a conversation with
    pub const USER_LIST: &'static str = "user-list";
    /// Message thread with one user
    pub const MESSAGES: &'static str = "messages";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ViewId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ViewId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a matched route leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Terminal view
    View(ViewId),
    /// Another path; may reference the source pattern's named segment as `:name`
    Redirect(String),
}

impl Target {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Target::Redirect(_))
    }

    pub fn view_id(&self) -> Option<&ViewId> {
        match self {
            Target::View(id) => Some(id),
            Target::Redirect(_) => None,
        }
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Target::Redirect(to) => Some(to),
            Target::View(_) => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::View(id) => write!(f, "view {id}"),
            Target::Redirect(to) => write!(f, "redirect -> {to}"),
        }
    }
}
