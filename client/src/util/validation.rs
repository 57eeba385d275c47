//! Per-field validation for every form in the client.
//!
//! DESIGN
//! ======
//! Each form is a [`RuleSet`]; each field of a form maps to one [`Rule`].
//! Both mappings are exhaustive `match`es, so adding a field or a form
//! forces a decision about its rule. Rules are pure functions of the field
//! value and the form snapshot (needed for `confirmPassword`).
//!
//! [`Validator`] keeps the per-field messages, the touched set and an
//! optional form-level banner. An empty message means the field is valid.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use super::form::{Field, FormState};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern should compile"));

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MIN_PERSON_NAME_CHARS: usize = 2;
pub const GROUP_NAME_CHARS: (usize, usize) = (3, 50);
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_INVITE_CODE_CHARS: usize = 8;
pub const EXPENSE_NAME_CHARS: (usize, usize) = (3, 50);
pub const EXPENSE_TYPES: [&str; 2] = ["fixed", "variable"];
pub const SPLIT_METHODS: [&str; 2] = ["equal", "unequal"];

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

// =============================================================================
// RULES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Email,
    LoginPassword,
    NewPassword,
    ConfirmPassword,
    FirstName,
    LastName,
    GroupName,
    Description,
    InviteCode,
    ExpenseName,
    Amount,
    ExpenseType,
    SplitMethod,
}

impl Rule {
    /// Error message for `value`, or `""` when valid.
    #[must_use]
    pub fn check(self, value: &str, snapshot: &FormState) -> String {
        let message: &str = match self {
            Self::Email if value.is_empty() => "Email is required",
            Self::Email if !is_valid_email(value) => "Please enter a valid email address",
            Self::LoginPassword | Self::NewPassword if value.is_empty() => "Password is required",
            Self::NewPassword if char_len(value) < MIN_PASSWORD_CHARS => "Password must be at least 8 characters",
            Self::ConfirmPassword if value.is_empty() => "Please confirm your password",
            Self::ConfirmPassword if value != snapshot.text(Field::Password) => "Passwords do not match",
            Self::FirstName => return person_name("First name", value),
            Self::LastName => return person_name("Last name", value),
            Self::GroupName => return bounded("Group name", value.trim(), GROUP_NAME_CHARS),
            Self::Description if char_len(value.trim()) > MAX_DESCRIPTION_CHARS => {
                "Description must be at most 500 characters"
            }
            Self::InviteCode if value.trim().is_empty() => "Please fill in all required fields",
            Self::InviteCode if char_len(value.trim()) > MAX_INVITE_CODE_CHARS => {
                "Group code must be at most 8 characters"
            }
            Self::ExpenseName => return bounded("Expense name", value.trim(), EXPENSE_NAME_CHARS),
            Self::Amount if value.trim().is_empty() => "Amount is required",
            Self::Amount if !parse_amount(value).is_some_and(|a| a > 0.0) => "Amount must be a number greater than 0",
            Self::ExpenseType if !EXPENSE_TYPES.contains(&value) => "Please select an expense type",
            Self::SplitMethod if !SPLIT_METHODS.contains(&value) => "Please select a split method",
            _ => "",
        };
        message.to_owned()
    }
}

/// Parse a raw amount input. Rejects NaN and infinities.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|a| a.is_finite())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn person_name(label: &str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        format!("{label} is required")
    } else if char_len(trimmed) < MIN_PERSON_NAME_CHARS {
        format!("{label} must be at least {MIN_PERSON_NAME_CHARS} characters")
    } else {
        String::new()
    }
}

fn bounded(label: &str, value: &str, (min, max): (usize, usize)) -> String {
    let len = char_len(value);
    if len == 0 {
        format!("{label} is required")
    } else if len < min || len > max {
        format!("{label} must be between {min} and {max} characters")
    } else {
        String::new()
    }
}

// =============================================================================
// RULE SETS
// =============================================================================

/// One variant per form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSet {
    Login,
    Register,
    CreateGroup,
    JoinGroup,
    CreateExpense,
}

impl RuleSet {
    /// Fields validated by this form, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Login => &[Field::Email, Field::Password],
            Self::Register => &[
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
            ],
            Self::CreateGroup => &[Field::GroupName, Field::Description],
            Self::JoinGroup => &[Field::InviteCode],
            Self::CreateExpense => &[Field::ExpenseName, Field::Amount, Field::ExpenseType, Field::SplitMethod],
        }
    }

    /// Rule for `field` in this form; `None` for fields the form does not check.
    #[must_use]
    pub fn rule(self, field: Field) -> Option<Rule> {
        match (self, field) {
            (Self::Login | Self::Register, Field::Email) => Some(Rule::Email),
            (Self::Login, Field::Password) => Some(Rule::LoginPassword),
            (Self::Register, Field::Password) => Some(Rule::NewPassword),
            (Self::Register, Field::ConfirmPassword) => Some(Rule::ConfirmPassword),
            (Self::Register, Field::FirstName) => Some(Rule::FirstName),
            (Self::Register, Field::LastName) => Some(Rule::LastName),
            (Self::CreateGroup, Field::GroupName) => Some(Rule::GroupName),
            (Self::CreateGroup, Field::Description) => Some(Rule::Description),
            (Self::JoinGroup, Field::InviteCode) => Some(Rule::InviteCode),
            (Self::CreateExpense, Field::ExpenseName) => Some(Rule::ExpenseName),
            (Self::CreateExpense, Field::Amount) => Some(Rule::Amount),
            (Self::CreateExpense, Field::ExpenseType) => Some(Rule::ExpenseType),
            (Self::CreateExpense, Field::SplitMethod) => Some(Rule::SplitMethod),
            (
                Self::Login | Self::Register | Self::CreateGroup | Self::JoinGroup | Self::CreateExpense,
                Field::Email
                | Field::Password
                | Field::ConfirmPassword
                | Field::FirstName
                | Field::LastName
                | Field::RememberMe
                | Field::GroupName
                | Field::Description
                | Field::InviteCode
                | Field::ExpenseName
                | Field::Amount
                | Field::ExpenseType
                | Field::SplitMethod,
            ) => None,
        }
    }
}

// =============================================================================
// VALIDATOR
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub errors: BTreeMap<Field, String>,
    pub touched: BTreeSet<Field>,
    pub general: Option<String>,
}

/// Error bookkeeping for one form.
#[derive(Clone, Debug)]
pub struct Validator {
    rules: RuleSet,
    state: ValidationState,
}

impl Validator {
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules, state: ValidationState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    /// Evaluate one field's rule and store the result.
    pub fn validate_one(&mut self, field: Field, value: &str, snapshot: &FormState) -> String {
        let message = self
            .rules
            .rule(field)
            .map(|rule| rule.check(value, snapshot))
            .unwrap_or_default();
        self.state.errors.insert(field, message.clone());
        message
    }

    /// Mark `field` touched and validate it.
    pub fn handle_blur(&mut self, field: Field, value: &str, snapshot: &FormState) -> String {
        self.state.touched.insert(field);
        self.validate_one(field, value, snapshot)
    }

    /// Validate every field of the form, replacing all previous messages.
    /// Returns `true` when every message is empty.
    pub fn validate_all(&mut self, snapshot: &FormState) -> bool {
        let mut errors = BTreeMap::new();
        for &field in self.rules.fields() {
            let message = self
                .rules
                .rule(field)
                .map(|rule| rule.check(snapshot.text(field), snapshot))
                .unwrap_or_default();
            errors.insert(field, message);
        }
        let valid = errors.values().all(String::is_empty);
        self.state.errors = errors;
        self.state.touched = self.rules.fields().iter().copied().collect();
        valid
    }

    /// Stored message for `field`, `""` when none.
    #[must_use]
    pub fn error(&self, field: Field) -> &str {
        self.state.errors.get(&field).map_or("", String::as_str)
    }

    /// Message to render: only for touched fields with a non-empty error.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let message = self.error(field);
        (self.state.touched.contains(&field) && !message.is_empty()).then_some(message)
    }

    /// Attach a server-side message to a field.
    pub fn set_field_error(&mut self, field: Field, message: impl Into<String>) {
        self.state.touched.insert(field);
        self.state.errors.insert(field, message.into());
    }

    pub fn set_general(&mut self, message: Option<String>) {
        self.state.general = message;
    }

    #[must_use]
    pub fn general(&self) -> Option<&str> {
        self.state.general.as_deref()
    }

    /// Messages to render, ordered by field, including server-side ones.
    #[must_use]
    pub fn visible_errors(&self) -> Vec<(Field, &str)> {
        self.state
            .errors
            .keys()
            .filter_map(|&field| self.visible_error(field).map(|m| (field, m)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.state = ValidationState::default();
    }
}
