//! Login page: email, password and a remember-me checkbox.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::Submit;
use crate::app::Route;
use crate::state::auth::AuthSession;
use crate::util::form::{Field, FormState};
use crate::util::submit::SubmitLatch;
use crate::util::validation::{RuleSet, Validator};

pub struct LoginPage {
    auth: AuthSession,
    form: FormState,
    validator: Validator,
    latch: SubmitLatch,
}

impl LoginPage {
    #[must_use]
    pub fn new(auth: AuthSession) -> Self {
        Self {
            auth,
            form: FormState::blank([Field::Email, Field::Password, Field::RememberMe]),
            validator: Validator::new(RuleSet::Login),
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

    pub fn handle_change(&mut self, field: Field, raw: &str, checked: bool) {
        self.form.handle_change(field, raw, checked);
    }

    pub fn handle_blur(&mut self, field: Field) {
        let value = self.form.text(field).to_owned();
        self.validator.handle_blur(field, &value, &self.form);
    }

    /// Validate, sign in, and go to the groups list on success.
    pub async fn submit(&mut self) -> Submit<()> {
        let Some(_ticket) = self.latch.try_begin() else {
            return Submit::Busy;
        };
        self.validator.set_general(None);
        if !self.validator.validate_all(&self.form) {
            return Submit::Invalid;
        }

        let email = self.form.text(Field::Email).to_owned();
        let password = self.form.text(Field::Password).to_owned();
        match self.auth.login(&email, &password).await {
            Ok(()) => {
                self.form.reset();
                self.validator.clear();
                self.auth.api().navigator().navigate(Route::Groups);
                Submit::Done(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.validator.set_general(Some(e.to_string()));
                Submit::Rejected
            }
        }
    }
}
