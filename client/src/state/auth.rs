//! Auth session store: login, logout and registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`AuthSession`] instead of touching the token slot. A
//! successful login writes the slot, logout clears it, and the next request
//! through the shared [`ApiClient`] sees the change.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a tagged error whose `Display` is the copy
//! shown to the user. A failed login never touches the slot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::app::Route;
use crate::net::api::{ApiClient, ApiError};
use crate::net::errors::GENERIC_FAILURE;
use crate::net::types::{Account, Registration};
use crate::net;
use crate::state::session::Session;
use crate::util::form::Field;

const LOGIN_FALLBACK: &str = "An unexpected error occurred during login.";
const REGISTER_FALLBACK: &str = "An unexpected error occurred during registration.";

// =============================================================================
// ERRORS
// =============================================================================

/// Why a login or logout did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Backend answered 401.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Backend answered 404.
    #[error("No account found with this email.")]
    NoSuchAccount,

    /// Any other unsuccessful response.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response was received.
    #[error("Network error or server unreachable. Please try again.")]
    NetworkUnreachable,

    /// The token slot could not be written or cleared.
    #[error("Could not update the saved session: {0}")]
    Storage(String),
}

impl From<ApiError> for AuthError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(_) => Self::NetworkUnreachable,
            ApiError::Unauthorized { .. } => Self::InvalidCredentials,
            ApiError::Status { status: 404, .. } => Self::NoSuchAccount,
            ApiError::Status { status, message } => Self::Server { status, message: or_fallback(message, LOGIN_FALLBACK) },
            ApiError::Decode(_) => Self::Server { status: 200, message: LOGIN_FALLBACK.to_owned() },
        }
    }
}

/// Why a registration did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// Backend answered 400: the email is already registered.
    #[error("Email already exists.")]
    EmailTaken,

    /// Backend rejected the request for another reason.
    #[error("{0}")]
    Rejected(String),

    /// No response was received.
    #[error("Network error or server unreachable. Please try again.")]
    NetworkUnreachable,
}

impl RegisterError {
    /// Form field the message belongs to, or `None` for the general banner.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        self.to_string().to_lowercase().contains("email").then_some(Field::Email)
    }
}

impl From<ApiError> for RegisterError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(_) => Self::NetworkUnreachable,
            ApiError::Status { status: 400, .. } => Self::EmailTaken,
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                Self::Rejected(or_fallback(message, REGISTER_FALLBACK))
            }
            ApiError::Decode(_) => Self::Rejected(REGISTER_FALLBACK.to_owned()),
        }
    }
}

fn or_fallback(message: String, fallback: &str) -> String {
    if message.is_empty() || message == GENERIC_FAILURE { fallback.to_owned() } else { message }
}

// =============================================================================
// AUTH SESSION
// =============================================================================

/// Login/logout lifecycle over a shared [`ApiClient`].
#[derive(Clone)]
pub struct AuthSession {
    api: ApiClient,
}

impl AuthSession {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.api.session()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Exchange credentials for a bearer token and store it.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] classified by the backend response. The
    /// token slot is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let token = net::auth::request_token(&self.api, email, password)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "login rejected");
                AuthError::from(e)
            })?;
        if token.access_token.is_empty() {
            tracing::warn!("login response carried an empty token");
            return Err(AuthError::Server { status: 200, message: LOGIN_FALLBACK.to_owned() });
        }
        self.session()
            .store_token(&token.access_token)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        tracing::info!("signed in");
        Ok(())
    }

    /// Clear the token slot and go to the public entry route.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the slot could not be cleared.
    pub fn logout(&self) -> Result<(), AuthError> {
        let cleared = self.session().clear();
        self.api.navigator().navigate(Route::PUBLIC_ENTRY);
        match cleared {
            Ok(()) => {
                tracing::info!("signed out");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to clear token slot on logout");
                Err(AuthError::Storage(e.to_string()))
            }
        }
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns a [`RegisterError`] classified by the backend response.
    pub async fn register(&self, registration: &Registration) -> Result<Account, RegisterError> {
        net::auth::register(&self.api, registration).await.map_err(|e| {
            tracing::warn!(error = %e, "registration rejected");
            RegisterError::from(e)
        })
    }
}
