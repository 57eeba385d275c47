//! Page controllers for each route-level screen.
//!
//! ARCHITECTURE
//! ============
//! A page owns its [`FormState`](crate::util::form::FormState), its
//! [`Validator`](crate::util::validation::Validator) and a submit latch, and
//! calls the `net` services through the shared
//! [`ApiClient`](crate::net::api::ApiClient). Front ends render whatever the
//! page exposes; they never call services directly.
//!
//! Submission runs latch, then `validate_all`, then the request. Success
//! resets the form and navigates. Failure leaves messages on the validator.

pub mod expense;
pub mod group;
pub mod groups;
pub mod login;
pub mod register;

use crate::app::Route;
use crate::net::api::ApiError;

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Submit<T> {
    /// The backend accepted the request.
    Done(T),
    /// Local validation failed; nothing was sent.
    Invalid,
    /// Another submission is in flight; nothing was sent.
    Busy,
    /// The backend rejected the request; messages are on the validator.
    Rejected,
}

impl<T> Submit<T> {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Why a protected page could not load.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The route guard sent the user elsewhere.
    #[error("please log in to continue")]
    Redirected(Route),

    #[error("{}", .0.message())]
    Api(#[from] ApiError),
}
