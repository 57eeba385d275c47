//! Groups list page with create-group and join-group forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. `load` asks the route guard first and only then hits
//! `GET /groups/all`. Created and joined groups are appended to the loaded
//! list without a refetch.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use super::{PageError, Submit};
use crate::app::Route;
use crate::net::api::ApiClient;
use crate::net::groups;
use crate::net::types::Group;
use crate::util::auth::enter;
use crate::util::form::{Field, FormState};
use crate::util::submit::SubmitLatch;
use crate::util::validation::{RuleSet, Validator};

pub const JOIN_FAILED: &str = "Group code is invalid";

pub struct GroupsPage {
    api: ApiClient,
    groups: Vec<Group>,
    create_form: FormState,
    create_validator: Validator,
    join_form: FormState,
    join_validator: Validator,
    latch: SubmitLatch,
}

impl GroupsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            groups: Vec::new(),
            create_form: FormState::blank(RuleSet::CreateGroup.fields().iter().copied()),
            create_validator: Validator::new(RuleSet::CreateGroup),
            join_form: FormState::blank(RuleSet::JoinGroup.fields().iter().copied()),
            join_validator: Validator::new(RuleSet::JoinGroup),
            latch: SubmitLatch::new(),
        }
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn create_validator(&self) -> &Validator {
        &self.create_validator
    }

    #[must_use]
    pub fn join_validator(&self) -> &Validator {
        &self.join_validator
    }

    #[must_use]
    pub fn latch(&self) -> &SubmitLatch {
        &self.latch
    }

    pub fn handle_create_change(&mut self, field: Field, raw: &str) {
        self.create_form.handle_change(field, raw, false);
    }

    pub fn handle_join_change(&mut self, raw: &str) {
        self.join_form.handle_change(Field::InviteCode, raw, false);
    }

    /// Guard the route and fetch the user's groups.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Redirected`] when signed out, or the API failure.
    pub async fn load(&mut self) -> Result<&[Group], PageError> {
        if !enter(self.api.session(), self.api.navigator(), Route::Groups) {
            return Err(PageError::Redirected(Route::PUBLIC_ENTRY));
        }
        self.groups = groups::list_groups(&self.api).await?;
        Ok(&self.groups)
    }

    pub async fn submit_create(&mut self) -> Submit<Group> {
        let Some(_ticket) = self.latch.try_begin() else {
            return Submit::Busy;
        };
        self.create_validator.set_general(None);
        if !self.create_validator.validate_all(&self.create_form) {
            return Submit::Invalid;
        }

        let name = self.create_form.text(Field::GroupName).to_owned();
        let description = self.create_form.text(Field::Description).to_owned();
        match groups::create_group(&self.api, &name, Some(&description)).await {
            Ok(group) => {
                self.create_form.reset();
                self.create_validator.clear();
                self.groups.push(group.clone());
                Submit::Done(group)
            }
            Err(e) => {
                tracing::warn!(error = %e, "create group failed");
                self.create_validator.set_general(Some(e.message().to_owned()));
                Submit::Rejected
            }
        }
    }

    pub async fn submit_join(&mut self) -> Submit<Group> {
        let Some(_ticket) = self.latch.try_begin() else {
            return Submit::Busy;
        };
        if !self.join_validator.validate_all(&self.join_form) {
            return Submit::Invalid;
        }

        let code = self.join_form.text(Field::InviteCode).to_owned();
        match groups::join_group(&self.api, &code).await {
            Ok(group) => {
                self.join_form.reset();
                self.join_validator.clear();
                self.groups.push(group.clone());
                Submit::Done(group)
            }
            Err(e) => {
                tracing::warn!(error = %e, "join group failed");
                self.join_validator.set_field_error(Field::InviteCode, JOIN_FAILED);
                Submit::Rejected
            }
        }
    }
}
