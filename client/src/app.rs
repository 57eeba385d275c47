//! Application routes and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages, the route guard and the API client's 401 policy all express
//! navigation as a [`Route`] handed to a [`Navigate`] implementation. The
//! guard and logout land on [`Route::PUBLIC_ENTRY`]; an expired session
//! lands on [`Route::LOGIN_ENTRY`]. The CLI front end uses [`History`] and inspects it after each command.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Every view the client can show.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    Groups,
    Group(String),
    CreateExpense(String),
}

impl Route {
    /// Where the route guard and an explicit logout send signed-out users.
    pub const PUBLIC_ENTRY: Route = Route::Landing;

    /// Where the API client's 401 policy sends a user whose session expired.
    pub const LOGIN_ENTRY: Route = Route::Login;

    /// Whether the route requires an authenticated session.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Groups | Self::Group(_) | Self::CreateExpense(_))
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Groups => "/groups".to_owned(),
            Self::Group(id) => format!("/groups/{id}"),
            Self::CreateExpense(group_id) => format!("/groups/{group_id}/expenses/new"),
        }
    }

    /// Parse a path produced by [`Route::path`]. Unknown paths return `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Some(Self::Landing),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["groups"] => Some(Self::Groups),
            ["groups", id] => Some(Self::Group((*id).to_owned())),
            ["groups", id, "expenses", "new"] => Some(Self::CreateExpense((*id).to_owned())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation sink. Implementations must be cheap to call from any task.
pub trait Navigate: Send + Sync {
    fn navigate(&self, route: Route);
}

/// In-memory navigation history shared by clones.
#[derive(Clone, Debug)]
pub struct History {
    inner: Arc<Mutex<Vec<Route>>>,
}

impl History {
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self { inner: Arc::new(Mutex::new(vec![start])) }
    }

    /// The route most recently navigated to.
    #[must_use]
    pub fn current(&self) -> Route {
        let entries = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        entries.last().cloned().unwrap_or(Route::Landing)
    }

    /// Every route visited, oldest first, including the starting route.
    #[must_use]
    pub fn entries(&self) -> Vec<Route> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Landing)
    }
}

impl Navigate for History {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
