//! Controlled-input form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page controller owns one [`FormState`]. Inputs write through
//! [`FormState::handle_change`]; validators and submit handlers read the
//! snapshot. Values stay raw strings until the submit handler parses them.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

// =============================================================================
// FIELDS
// =============================================================================

/// Every input the client renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    RememberMe,
    GroupName,
    Description,
    InviteCode,
    ExpenseName,
    Amount,
    ExpenseType,
    SplitMethod,
}

/// How an input reports its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Checkbox,
}

impl Field {
    /// Wire and display name of the input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::RememberMe => "remember_me",
            Self::GroupName | Self::ExpenseName => "name",
            Self::Description => "description",
            Self::InviteCode => "invite_code",
            Self::Amount => "amount",
            Self::ExpenseType => "expense_type",
            Self::SplitMethod => "split_method",
        }
    }

    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::RememberMe => InputKind::Checkbox,
            _ => InputKind::Text,
        }
    }
}

// =============================================================================
// VALUES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    #[must_use]
    pub fn empty_for(field: Field) -> Self {
        match field.input_kind() {
            InputKind::Text => Self::Text(String::new()),
            InputKind::Checkbox => Self::Checked(false),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Current values plus the construction-time mapping `reset` restores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    initial: BTreeMap<Field, FieldValue>,
    values: BTreeMap<Field, FieldValue>,
}

impl FormState {
    pub fn new(initial: impl IntoIterator<Item = (Field, FieldValue)>) -> Self {
        let initial: BTreeMap<_, _> = initial.into_iter().collect();
        Self { values: initial.clone(), initial }
    }

    /// A form whose fields all start empty (unchecked for checkboxes).
    pub fn blank(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::new(fields.into_iter().map(|f| (f, FieldValue::empty_for(f))))
    }

    /// Text value of `field`, or `""` when absent or a checkbox.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match self.values.get(&field) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    #[must_use]
    pub fn checked(&self, field: Field) -> bool {
        matches!(self.values.get(&field), Some(FieldValue::Checked(true)))
    }

    /// Shallow merge of one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    /// Apply an input change event: checkboxes take `checked`, everything
    /// else takes the raw string as typed.
    pub fn handle_change(&mut self, field: Field, raw: &str, checked: bool) {
        let value = match field.input_kind() {
            InputKind::Checkbox => FieldValue::Checked(checked),
            InputKind::Text => FieldValue::Text(raw.to_owned()),
        };
        self.values.insert(field, value);
    }

    pub fn reset(&mut self) {
        self.values.clone_from(&self.initial);
    }

    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.values == self.initial
    }
}
