//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! Responses tolerate extra fields and missing optional ones so small
//! backend schema drift does not break listing pages. Identifiers stay as
//! UUID strings; the client never interprets them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Successful `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// `POST /register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Account representation returned by `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

/// Backend timestamps arrive either as Unix seconds or as ISO-8601 text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(i64),
    Text(String),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}"),
            // Show the date part of ISO-8601 values.
            Self::Text(text) => f.write_str(text.split('T').next().unwrap_or(text)),
        }
    }
}

// =============================================================================
// GROUPS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// `POST /groups/create` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
}

/// `POST /groups/join` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JoinRequest {
    pub invite_code: String,
}

/// One row from `GET /groups/get-members/{group_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GroupMembership {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    pub user_id: String,
}

/// A user as returned by `GET /users/single/{user_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl Member {
    /// "First Last", falling back to the username and then the email.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            return full.to_owned();
        }
        match self.username.as_deref().map(str::trim) {
            Some(username) if !username.is_empty() => username.to_owned(),
            _ => self.email.clone(),
        }
    }

    /// Avatar initials, e.g. `"JD"` for Jane Doe.
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

// =============================================================================
// EXPENSES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub expense_type: String,
    #[serde(default)]
    pub split_method: String,
    #[serde(default)]
    pub settled: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpenseShare {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub expense_id: String,
    pub user_id: String,
    pub amount_owed: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub settled: bool,
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub shares: Option<f64>,
}

/// `POST /expenses/create/{group_id}` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedExpense {
    pub expense: Expense,
    #[serde(default)]
    pub shares: Vec<ExpenseShare>,
}

/// `POST /expenses/create/{group_id}` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub expense_type: String,
    pub split_method: String,
    pub settled: bool,
    pub participants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splits: Option<Vec<f64>>,
}
