//! Group detail page: the group, its members and its expenses.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use super::PageError;
use crate::app::Route;
use crate::net::api::ApiClient;
use crate::net::types::{Expense, Group, Member};
use crate::net::{expenses, groups};
use crate::util::auth::enter;

pub struct GroupPage {
    api: ApiClient,
    group_id: String,
    group: Option<Group>,
    members: Vec<Member>,
    expenses: Vec<Expense>,
}

impl GroupPage {
    #[must_use]
    pub fn new(api: ApiClient, group_id: impl Into<String>) -> Self {
        Self { api, group_id: group_id.into(), group: None, members: Vec::new(), expenses: Vec::new() }
    }

    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    #[must_use]
    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Member display name for `user_id`, if they belong to the group.
    #[must_use]
    pub fn member_name(&self, user_id: &str) -> Option<String> {
        self.members.iter().find(|m| m.id == user_id).map(Member::display_name)
    }

    /// Guard the route, then load group, members and expenses in that order.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Redirected`] when signed out, or the first API
    /// failure. Partially loaded data is kept.
    pub async fn load(&mut self) -> Result<(), PageError> {
        if !enter(self.api.session(), self.api.navigator(), Route::Group(self.group_id.clone())) {
            return Err(PageError::Redirected(Route::PUBLIC_ENTRY));
        }
        self.group = Some(groups::get_group(&self.api, &self.group_id).await?);
        self.members = groups::get_group_members(&self.api, &self.group_id).await?;
        self.expenses = expenses::list_expenses(&self.api, &self.group_id).await?;
        tracing::debug!(
            group_id = %self.group_id,
            members = self.members.len(),
            expenses = self.expenses.len(),
            "group loaded"
        );
        Ok(())
    }
}
