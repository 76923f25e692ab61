//! Resolution outcomes handed back to the view-activation layer

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ViewId;

/// Named-segment values extracted from a path, ordered by name
pub type Params = BTreeMap<String, String>;

/// Why a resolution failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorReason {
    /// The redirect hop bound was exceeded
    RedirectLoop,
}

/// Result of resolving one path
///
/// Serializes as
/// `{"kind":"view","viewId":..,"params":{..}}`, `{"kind":"redirect","target":..}`,
/// `{"kind":"not-found"}` or `{"kind":"error","reason":"redirect-loop"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Resolution {
    View {
        #[serde(rename = "viewId")]
        view_id: ViewId,
        params: Params,
    },
    /// Only produced by single-step resolution
    Redirect { target: String },
    NotFound,
    Error { reason: ErrorReason },
}

impl Resolution {
    pub fn is_view(&self) -> bool {
        matches!(self, Resolution::View { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }

    pub fn view_id(&self) -> Option<&ViewId> {
        match self {
            Resolution::View { view_id, .. } => Some(view_id),
            _ => None,
        }
    }

    /// Looks up a parameter passed to the resolved view
    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            Resolution::View { params, .. } => params.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Short label used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::View { .. } => "view",
            Resolution::Redirect { .. } => "redirect",
            Resolution::NotFound => "not-found",
            Resolution::Error { .. } => "error",
        }
    }
}

/// A view resolved by [`RouteTable::resolve_strict`](crate::RouteTable::resolve_strict)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedView {
    #[serde(rename = "viewId")]
    pub view_id: ViewId,
    pub params: Params,
}

/// Outcome of resolution together with every path visited on the way
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Requested path first, then each redirect target in order
    pub chain: Vec<String>,
    pub outcome: Resolution,
}

impl Navigation {
    /// Number of redirects followed
    pub fn hops(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    /// Path that produced the final outcome
    pub fn final_path(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}
