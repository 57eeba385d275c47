//! Central HTTP dispatch for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feature services (groups, expenses, users) and the auth session store
//! all go through [`ApiClient`]. It applies two policies:
//!
//! - request: authenticated calls read the token slot at send time and
//!   attach it as a bearer credential, so a logout is honored immediately;
//! - response: a 401 on an authenticated call clears the slot and forces
//!   navigation to the login route before the error propagates.
//!
//! Auth endpoints are sent anonymously. A 401 from `/login` means bad
//! credentials, not an expired session, and must not trigger the policy.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an [`ApiError`] that separates "no response" from "non-2xx
//! response", so pages can show a connectivity message or a server message.
//! The 401 policy covers every bearer call and no anonymous one: a 401 from
//! `/login` or `/register` comes back as [`ApiError::Unauthorized`] with the
//! slot and the current route left untouched.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::errors::normalize_backend_error;
use super::transport::{Body, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
use crate::app::{Navigate, Route};
use crate::config::ClientConfig;
use crate::state::session::Session;

/// Classified failure of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered 401.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The backend answered with another non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Human-readable message without the classification prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Decode(message) => message,
            Self::Unauthorized { message } | Self::Status { message, .. } => message,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        Self::Network(e.to_string())
    }
}

/// Whether a call carries the session's bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Bearer,
    Anonymous,
}

/// Single HTTP entry point shared by every feature.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Session,
    navigator: Arc<dyn Navigate>,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, session: Session, navigator: Arc<dyn Navigate>) -> Self {
        Self { transport, session, navigator }
    }

    /// Build a client that talks to `config.api_url` over `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(
        config: &ClientConfig,
        session: Session,
        navigator: Arc<dyn Navigate>,
    ) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.api_url.clone(), config.timeouts)?;
        Ok(Self::new(Arc::new(transport), session, navigator))
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn navigator(&self) -> &dyn Navigate {
        self.navigator.as_ref()
    }

    /// Authenticated `GET`, decoding a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .dispatch(Method::GET, path, Body::Empty, Access::Bearer)
            .await?;
        decode(&response)
    }

    /// Authenticated JSON `POST`, decoding a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .dispatch(Method::POST, path, Body::Json(body), Access::Bearer)
            .await?;
        decode(&response)
    }

    pub(crate) async fn post_anonymous<T: DeserializeOwned>(&self, path: &str, body: Body) -> Result<T, ApiError> {
        let response = self
            .dispatch(Method::POST, path, body, Access::Anonymous)
            .await?;
        decode(&response)
    }

    async fn dispatch(&self, method: Method, path: &str, body: Body, access: Access) -> Result<HttpResponse, ApiError> {
        // Read per request; never cache the token across calls.
        let bearer = match access {
            Access::Bearer => self.session.token(),
            Access::Anonymous => None,
        };
        tracing::debug!(%method, path, authenticated = bearer.is_some(), "api request");

        let request = HttpRequest { method, path: path.to_owned(), bearer, body };
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(TransportError::Body { status, message }) => {
                tracing::warn!(path, status, error = %message, "api response body unreadable");
                if (200..300).contains(&status) {
                    return Err(ApiError::Decode(message));
                }
                // The status still drives classification and the 401 policy.
                HttpResponse { status, body: String::new() }
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "api request got no response");
                return Err(e.into());
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        let message = normalize_backend_error(&response.body);
        if response.status == 401 {
            if access == Access::Bearer {
                self.force_logout();
            }
            return Err(ApiError::Unauthorized { message });
        }
        tracing::debug!(path, status = response.status, "api request failed");
        Err(ApiError::Status { status: response.status, message })
    }

    fn force_logout(&self) {
        tracing::warn!("backend rejected session; signing out");
        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "failed to clear token slot after 401");
        }
        self.navigator.navigate(Route::LOGIN_ENTRY);
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
