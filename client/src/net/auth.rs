//! Auth endpoint calls.
//!
//! Both endpoints are anonymous: no bearer header is attached and a 401 is
//! returned to the caller untouched. Session bookkeeping lives in
//! `state::auth`; this module only speaks HTTP.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, ApiError};
use super::transport::Body;
use super::types::{Account, Registration, TokenResponse};

/// `POST /login` as an OAuth2 password form (`username`, `password`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn request_token(api: &ApiClient, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let form = vec![
        ("username".to_owned(), email.to_owned()),
        ("password".to_owned(), password.to_owned()),
    ];
    api.post_anonymous("/login", Body::Form(form)).await
}

/// `POST /register` with a JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn register(api: &ApiClient, registration: &Registration) -> Result<Account, ApiError> {
    let body = serde_json::to_value(registration).map_err(|e| ApiError::Decode(e.to_string()))?;
    api.post_anonymous("/register", Body::Json(body)).await
}
