//! The chat application's route table
//!
//! | Pattern | Target | Params passed |
//! |---|---|---|
//! | `/` | redirect → `/login` | — |
//! | `/login` | view `auth` | no |
//! | `/messages` | view `user-list` | no |
//! | `/messages/:userId` | view `messages` | yes (`userId`) |
//!
//! `/` always lands on the login screen; authentication state is not consulted.

use crate::{Route, RouteTable, TableError, ViewId};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const USER_LIST_PATH: &str = "/messages";
pub const THREAD_PATTERN: &str = "/messages/:userId";

/// Named segment carrying the conversation partner's id
pub const USER_ID_PARAM: &str = "userId";

/// Route entries in declaration order
pub fn chat_routes() -> Result<Vec<Route>, TableError> {
    Ok(vec![
        Route::redirect(ROOT_PATH, LOGIN_PATH)?,
        Route::view(LOGIN_PATH, ViewId::AUTH)?.with_name("login"),
        Route::view(USER_LIST_PATH, ViewId::USER_LIST)?.with_name("users"),
        Route::view(THREAD_PATTERN, ViewId::MESSAGES)?
            .with_props()
            .with_name("thread"),
    ])
}

impl RouteTable {
    /// Builds the chat application's table
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_router::RouteTable;
    ///
    /// let table = RouteTable::chat().unwrap();
    /// let resolved = table.resolve("/messages/42");
    /// assert_eq!(resolved.param("userId"), Some("42"));
    /// ```
    pub fn chat() -> Result<Self, TableError> {
        RouteTable::builder()
            .with_root_redirect_only(true)
            .with_routes(chat_routes()?)
            .build()
    }
}
