//! Group service calls.
//!
//! Member resolution is two-step: the membership endpoint returns user ids
//! and each id is looked up through `users::get_user`. Lookups run one at a
//! time, in membership order, and the first failure aborts the whole load.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use super::api::{ApiClient, ApiError};
use super::types::{Group, GroupMembership, JoinRequest, Member, NewGroup};
use super::users;

/// `GET /groups/all`: groups the current user belongs to.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn list_groups(api: &ApiClient) -> Result<Vec<Group>, ApiError> {
    api.get("/groups/all").await
}

/// `POST /groups/create`. A blank description is sent as `null`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn create_group(api: &ApiClient, name: &str, description: Option<&str>) -> Result<Group, ApiError> {
    let body = NewGroup {
        name: name.trim().to_owned(),
        description: description.map(str::trim).filter(|d| !d.is_empty()).map(str::to_owned),
    };
    api.post_json("/groups/create", &body).await
}

/// `POST /groups/join` with an invite code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn join_group(api: &ApiClient, invite_code: &str) -> Result<Group, ApiError> {
    let body = JoinRequest { invite_code: invite_code.trim().to_owned() };
    api.post_json("/groups/join", &body).await
}

/// `GET /groups/single/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn get_group(api: &ApiClient, group_id: &str) -> Result<Group, ApiError> {
    api.get(&format!("/groups/single/{group_id}")).await
}

/// `GET /groups/get-members/{id}`, each membership resolved to a [`Member`].
///
/// # Errors
///
/// Returns the first [`ApiError`] hit while listing or resolving members.
pub async fn get_group_members(api: &ApiClient, group_id: &str) -> Result<Vec<Member>, ApiError> {
    let memberships: Vec<GroupMembership> = api.get(&format!("/groups/get-members/{group_id}")).await?;
    let mut members = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        members.push(users::get_user(api, &membership.user_id).await?);
    }
    tracing::debug!(group_id, count = members.len(), "resolved group members");
    Ok(members)
}
