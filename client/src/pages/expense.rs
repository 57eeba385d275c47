//! Create-expense page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a group. Members are loaded first so the participant picker
//! can only offer people in the group. The amount stays a raw string in the
//! form and is parsed once, at submit time.

#[cfg(test)]
#[path = "expense_test.rs"]
mod expense_test;

use super::{PageError, Submit};
use crate::app::Route;
use crate::net::api::ApiClient;
use crate::net::types::{CreatedExpense, Member, NewExpense};
use crate::net::{expenses, groups};
use crate::util::auth::enter;
use crate::util::form::{Field, FormState};
use crate::util::submit::SubmitLatch;
use crate::util::validation::{RuleSet, Validator, parse_amount};

/// Why a participant could not be added.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParticipantError {
    #[error("user is not a member of this group")]
    NotAMember,
    #[error("user is already a participant")]
    AlreadyAdded,
}

pub struct CreateExpensePage {
    api: ApiClient,
    group_id: String,
    members: Vec<Member>,
    participants: Vec<String>,
    form: FormState,
    validator: Validator,
    latch: SubmitLatch,
}

impl CreateExpensePage {
    #[must_use]
    pub fn new(api: ApiClient, group_id: impl Into<String>) -> Self {
        let mut form = FormState::blank(RuleSet::CreateExpense.fields().iter().copied());
        form.set_field(Field::SplitMethod, "equal");
        Self {
            api,
            group_id: group_id.into(),
            members: Vec::new(),
            participants: Vec::new(),
            form,
            validator: Validator::new(RuleSet::CreateExpense),
            latch: SubmitLatch::new(),
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    #[must_use]
    pub fn latch(&self) -> &SubmitLatch {
        &self.latch
    }

    pub fn handle_change(&mut self, field: Field, raw: &str) {
        self.form.handle_change(field, raw, false);
    }

    pub fn handle_blur(&mut self, field: Field) {
        let value = self.form.text(field).to_owned();
        self.validator.handle_blur(field, &value, &self.form);
    }

    /// Guard the route and load the group's members.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Redirected`] when signed out, or the API failure.
    pub async fn load_members(&mut self) -> Result<&[Member], PageError> {
        let route = Route::CreateExpense(self.group_id.clone());
        if !enter(self.api.session(), self.api.navigator(), route) {
            return Err(PageError::Redirected(Route::PUBLIC_ENTRY));
        }
        self.members = groups::get_group_members(&self.api, &self.group_id).await?;
        Ok(&self.members)
    }

    /// Add a loaded member to the participant list.
    ///
    /// # Errors
    ///
    /// Rejects unknown users and duplicates.
    pub fn add_participant(&mut self, user_id: &str) -> Result<(), ParticipantError> {
        if !self.members.iter().any(|m| m.id == user_id) {
            return Err(ParticipantError::NotAMember);
        }
        if self.participants.iter().any(|p| p == user_id) {
            return Err(ParticipantError::AlreadyAdded);
        }
        self.participants.push(user_id.to_owned());
        Ok(())
    }

    pub fn remove_participant(&mut self, user_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != user_id);
        self.participants.len() != before
    }

    /// Validate, create the expense, and return to the group on success.
    pub async fn submit(&mut self) -> Submit<CreatedExpense> {
        let Some(_ticket) = self.latch.try_begin() else {
            return Submit::Busy;
        };
        self.validator.set_general(None);
        if !self.validator.validate_all(&self.form) {
            return Submit::Invalid;
        }
        // validate_all already rejected unparsable amounts.
        let Some(amount) = parse_amount(self.form.text(Field::Amount)) else {
            return Submit::Invalid;
        };

        let expense = NewExpense {
            name: self.form.text(Field::ExpenseName).trim().to_owned(),
            amount,
            expense_type: self.form.text(Field::ExpenseType).to_owned(),
            split_method: self.form.text(Field::SplitMethod).to_owned(),
            settled: false,
            participants: self.participants.clone(),
            splits: None,
        };
        match expenses::create_expense(&self.api, &self.group_id, &expense).await {
            Ok(created) => {
                self.form.reset();
                self.participants.clear();
                self.validator.clear();
                self.api.navigator().navigate(Route::Group(self.group_id.clone()));
                Submit::Done(created)
            }
            Err(e) => {
                tracing::warn!(error = %e, group_id = %self.group_id, "create expense failed");
                self.validator.set_general(Some(e.message().to_owned()));
                Submit::Rejected
            }
        }
    }
}
