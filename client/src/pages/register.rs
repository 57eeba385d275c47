//! Registration page with live password strength.
//!
//! Server errors that mention the email land on the email field; anything
//! else goes to the form banner.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::Submit;
use crate::app::Route;
use crate::net::types::{Account, Registration};
use crate::state::auth::AuthSession;
use crate::util::form::{Field, FormState};
use crate::util::password_strength::{self, PasswordStrength};
use crate::util::submit::SubmitLatch;
use crate::util::validation::{RuleSet, Validator};

pub struct RegisterPage {
    auth: AuthSession,
    form: FormState,
    validator: Validator,
    latch: SubmitLatch,
}

impl RegisterPage {
    #[must_use]
    pub fn new(auth: AuthSession) -> Self {
        Self {
            auth,
            form: FormState::blank(RuleSet::Register.fields().iter().copied()),
            validator: Validator::new(RuleSet::Register),
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

    /// Strength of the password as currently typed.
    #[must_use]
    pub fn strength(&self) -> PasswordStrength {
        password_strength::score(self.form.text(Field::Password))
    }

    fn registration(&self) -> Registration {
        Registration {
            first_name: self.form.text(Field::FirstName).trim().to_owned(),
            last_name: self.form.text(Field::LastName).trim().to_owned(),
            email: self.form.text(Field::Email).to_owned(),
            password: self.form.text(Field::Password).to_owned(),
            confirm_password: self.form.text(Field::ConfirmPassword).to_owned(),
        }
    }

    /// Validate, create the account, and go to the login page on success.
    pub async fn submit(&mut self) -> Submit<Account> {
        let Some(_ticket) = self.latch.try_begin() else {
            return Submit::Busy;
        };
        self.validator.set_general(None);
        if !self.validator.validate_all(&self.form) {
            return Submit::Invalid;
        }

        match self.auth.register(&self.registration()).await {
            Ok(account) => {
                self.form.reset();
                self.validator.clear();
                self.auth.api().navigator().navigate(Route::Login);
                Submit::Done(account)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                match e.field() {
                    Some(field) => self.validator.set_field_error(field, e.to_string()),
                    None => self.validator.set_general(Some(e.to_string())),
                }
                Submit::Rejected
            }
        }
    }
}
