//! # Chat Router
//!
//! Framework-agnostic client-side route resolution. A [`RouteTable`] maps
//! request paths to opaque view identifiers and the parameters those views
//! receive; rendering the view is left to the caller.
//!
//! - Static routes (`/login`)
//! - One named segment per route (`/messages/:userId` or `/messages/{userId}`)
//! - Redirect routes, followed up to a fixed hop bound
//! - Reverse lookup by route name or view identifier
//!
//! ## Matching Rules
//!
//! - Routes are tried in declaration order; the first match wins
//! - Matching is case-sensitive and literal
//! - A named segment matches exactly one **non-empty** path component, so
//!   `/messages/` does not match `/messages/:userId`
//! - Paths are not normalized; see [`path::normalize_path`] for an opt-in helper
//!
//! ## Example
//!
//! ```
//! use chat_router::{Resolution, RouteTable, ViewId};
//!
//! let table = RouteTable::chat().unwrap();
//!
//! assert_eq!(table.resolve("/"), table.resolve("/login"));
//!
//! let resolved = table.resolve("/messages/42");
//! assert_eq!(resolved.view_id().map(ViewId::as_str), Some("messages"));
//! assert_eq!(resolved.param("userId"), Some("42"));
//!
//! assert_eq!(table.resolve("/messages/"), Resolution::NotFound);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod chat;
pub mod config;
mod error;
pub mod path;
mod resolution;
pub mod route;
mod table;
mod target;

pub use chat::chat_routes;
pub use config::Config;
pub use error::{ResolveError, TableError};
pub use path::{is_valid_path, normalize_path, strip_query_and_fragment};
pub use resolution::{ErrorReason, Navigation, Params, Resolution, ResolvedView};
pub use route::{Pattern, PatternSegment, Route};
pub use table::{RouteMatch, RouteTable, RouteTableBuilder, DEFAULT_MAX_REDIRECTS};
pub use target::{Target, ViewId};
