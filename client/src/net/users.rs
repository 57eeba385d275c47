//! User lookups.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::{ApiClient, ApiError};
use super::types::Member;

/// Fetch one user via `GET /users/single/{user_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn get_user(api: &ApiClient, user_id: &str) -> Result<Member, ApiError> {
    api.get(&format!("/users/single/{user_id}")).await
}
