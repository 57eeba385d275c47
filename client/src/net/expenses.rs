//! Expense service calls.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use super::api::{ApiClient, ApiError};
use super::types::{CreatedExpense, Expense, NewExpense};

/// `POST /expenses/create/{group_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn create_expense(api: &ApiClient, group_id: &str, expense: &NewExpense) -> Result<CreatedExpense, ApiError> {
    api.post_json(&format!("/expenses/create/{group_id}"), expense).await
}

/// `GET /get/expense/{expense_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn get_expense(api: &ApiClient, expense_id: &str) -> Result<Expense, ApiError> {
    api.get(&format!("/get/expense/{expense_id}")).await
}

/// `GET /get/expense/all/{group_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn list_expenses(api: &ApiClient, group_id: &str) -> Result<Vec<Expense>, ApiError> {
    api.get(&format!("/get/expense/all/{group_id}")).await
}
