//! Route guard for authenticated-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected command or page asks the guard before it loads data. The
//! decision reads the session synchronously; there is no loading state and
//! no backend round trip.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::app::{Navigate, Route};
use crate::state::session::Session;

/// Outcome of guarding a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
}

/// Decide whether `target` may render for the current session.
#[must_use]
pub fn guard(session: &Session, target: Route) -> GuardDecision {
    if !target.is_protected() || session.is_authenticated() {
        GuardDecision::Render(target)
    } else {
        GuardDecision::Redirect(Route::PUBLIC_ENTRY)
    }
}

/// Guard `target` and navigate to whichever route wins.
/// Returns `true` when `target` itself renders.
pub fn enter(session: &Session, navigator: &dyn Navigate, target: Route) -> bool {
    let requested = target.path();
    match guard(session, target) {
        GuardDecision::Render(route) => {
            navigator.navigate(route);
            true
        }
        GuardDecision::Redirect(route) => {
            tracing::debug!(requested, redirect = %route, "guard redirect");
            navigator.navigate(route);
            false
        }
    }
}
