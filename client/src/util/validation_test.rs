use super::*;
use crate::util::form::FieldValue;

fn register_form(pairs: &[(Field, &str)]) -> FormState {
    let mut form = FormState::blank(RuleSet::Register.fields().iter().copied());
    for &(field, value) in pairs {
        form.set_field(field, value);
    }
    form
}

fn empty() -> FormState {
    FormState::blank(Vec::<Field>::new())
}

fn valid_registration() -> FormState {
    register_form(&[
        (Field::FirstName, "Ada"),
        (Field::LastName, "Lovelace"),
        (Field::Email, "ada@example.com"),
        (Field::Password, "Secret123!"),
        (Field::ConfirmPassword, "Secret123!"),
    ])
}

// =============================================================================
// rules
// =============================================================================

#[test]
fn email_pattern_compiles() {
    assert!(Regex::new(EMAIL_PATTERN).is_ok());
    assert!(LazyLock::force(&EMAIL_RE).is_match("a@b.co"));
}

#[test]
fn email_rule_messages() {
    let form = empty();
    assert_eq!(Rule::Email.check("", &form), "Email is required");
    assert_eq!(Rule::Email.check("ada", &form), "Please enter a valid email address");
    assert_eq!(Rule::Email.check("ada@example", &form), "Please enter a valid email address");
    assert_eq!(Rule::Email.check("ada @example.com", &form), "Please enter a valid email address");
    assert_eq!(Rule::Email.check("ada@example.com", &form), "");
}

#[test]
fn password_rules_differ_between_login_and_register() {
    let form = empty();
    assert_eq!(Rule::LoginPassword.check("", &form), "Password is required");
    assert_eq!(Rule::LoginPassword.check("short", &form), "");
    assert_eq!(Rule::NewPassword.check("", &form), "Password is required");
    assert_eq!(Rule::NewPassword.check("short", &form), "Password must be at least 8 characters");
    assert_eq!(Rule::NewPassword.check("12345678", &form), "");
}

#[test]
fn confirm_password_compares_against_snapshot() {
    let form = register_form(&[(Field::Password, "Secret123!")]);
    assert_eq!(Rule::ConfirmPassword.check("", &form), "Please confirm your password");
    assert_eq!(Rule::ConfirmPassword.check("Secret123?", &form), "Passwords do not match");
    assert_eq!(Rule::ConfirmPassword.check("Secret123!", &form), "");
}

#[test]
fn person_names_are_trimmed() {
    let form = empty();
    assert_eq!(Rule::FirstName.check("   ", &form), "First name is required");
    assert_eq!(Rule::FirstName.check(" A ", &form), "First name must be at least 2 characters");
    assert_eq!(Rule::LastName.check("", &form), "Last name is required");
    assert_eq!(Rule::LastName.check(" Li ", &form), "");
}

#[test]
fn group_rules() {
    let form = empty();
    assert_eq!(Rule::GroupName.check("", &form), "Group name is required");
    assert_eq!(Rule::GroupName.check("ab", &form), "Group name must be between 3 and 50 characters");
    assert_eq!(Rule::GroupName.check(&"x".repeat(51), &form), "Group name must be between 3 and 50 characters");
    assert_eq!(Rule::GroupName.check("Flat 4B", &form), "");
    assert_eq!(Rule::Description.check("", &form), "");
    assert_eq!(Rule::Description.check(&"d".repeat(501), &form), "Description must be at most 500 characters");
    assert_eq!(Rule::InviteCode.check(" ", &form), "Please fill in all required fields");
    assert_eq!(Rule::InviteCode.check("ABCDEFGHI", &form), "Group code must be at most 8 characters");
    assert_eq!(Rule::InviteCode.check("AB12CD34", &form), "");
}

#[test]
fn expense_rules() {
    let form = empty();
    assert_eq!(Rule::ExpenseName.check("Rent", &form), "");
    assert_eq!(Rule::Amount.check("", &form), "Amount is required");
    assert_eq!(Rule::Amount.check("abc", &form), "Amount must be a number greater than 0");
    assert_eq!(Rule::Amount.check("0", &form), "Amount must be a number greater than 0");
    assert_eq!(Rule::Amount.check("-3", &form), "Amount must be a number greater than 0");
    assert_eq!(Rule::Amount.check("inf", &form), "Amount must be a number greater than 0");
    assert_eq!(Rule::Amount.check(" 12.5 ", &form), "");
    assert_eq!(Rule::ExpenseType.check("", &form), "Please select an expense type");
    assert_eq!(Rule::ExpenseType.check("variable", &form), "");
    assert_eq!(Rule::SplitMethod.check("percent", &form), "Please select a split method");
    assert_eq!(Rule::SplitMethod.check("unequal", &form), "");
}

#[test]
fn non_ascii_lengths_count_characters() {
    let form = empty();
    assert_eq!(Rule::FirstName.check("Zoë", &form), "");
    assert_eq!(Rule::NewPassword.check("ñññññññ", &form), "Password must be at least 8 characters");
}

#[test]
fn every_form_field_has_a_rule() {
    for set in [RuleSet::Login, RuleSet::Register, RuleSet::CreateGroup, RuleSet::JoinGroup, RuleSet::CreateExpense] {
        for &field in set.fields() {
            assert!(set.rule(field).is_some(), "{set:?} has no rule for {field:?}");
        }
    }
    assert_eq!(RuleSet::Login.rule(Field::RememberMe), None);
}

// =============================================================================
// validator
// =============================================================================

#[test]
fn validate_one_stores_message_without_touching() {
    let form = register_form(&[]);
    let mut v = Validator::new(RuleSet::Register);
    let message = v.validate_one(Field::Email, "", &form);
    assert_eq!(message, "Email is required");
    assert_eq!(v.error(Field::Email), "Email is required");
    assert_eq!(v.visible_error(Field::Email), None);
}

#[test]
fn handle_blur_marks_touched() {
    let form = register_form(&[]);
    let mut v = Validator::new(RuleSet::Register);
    v.handle_blur(Field::FirstName, "", &form);
    assert_eq!(v.visible_error(Field::FirstName), Some("First name is required"));
    assert!(v.state().touched.contains(&Field::FirstName));
}

#[test]
fn unknown_field_validates_clean() {
    let form = FormState::blank([Field::RememberMe]);
    let mut v = Validator::new(RuleSet::Login);
    assert_eq!(v.validate_one(Field::RememberMe, "", &form), "");
}

#[test]
fn validate_all_touches_every_field_and_replaces_errors() {
    let mut v = Validator::new(RuleSet::Register);
    v.set_field_error(Field::Email, "Email already exists.");
    assert!(v.validate_all(&valid_registration()));
    assert_eq!(v.state().touched.len(), RuleSet::Register.fields().len());
    assert!(v.state().errors.values().all(String::is_empty));
    assert!(v.visible_errors().is_empty());
}

#[test]
fn validate_all_equals_conjunction_of_validate_one() {
    let cases = [
        valid_registration(),
        register_form(&[]),
        register_form(&[(Field::Email, "bad"), (Field::Password, "Secret123!")]),
        register_form(&[
            (Field::FirstName, "Ada"),
            (Field::LastName, "Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::Password, "Secret123!"),
            (Field::ConfirmPassword, "Different1!"),
        ]),
    ];
    for form in &cases {
        let mut bulk = Validator::new(RuleSet::Register);
        let all = bulk.validate_all(form);

        let mut single = Validator::new(RuleSet::Register);
        let messages: Vec<String> = RuleSet::Register
            .fields()
            .iter()
            .map(|&f| single.validate_one(f, form.text(f), form))
            .collect();
        let conjunction = messages.iter().all(String::is_empty);

        assert_eq!(all, conjunction);
        assert_eq!(bulk.state().errors, single.state().errors);
    }
}

#[test]
fn mismatched_confirmation_fails_with_message() {
    let mut form = valid_registration();
    form.set_field(Field::ConfirmPassword, "Secret123?");
    let mut v = Validator::new(RuleSet::Register);
    assert!(!v.validate_all(&form));
    assert_eq!(v.error(Field::ConfirmPassword), "Passwords do not match");
}

#[test]
fn stale_confirmation_is_reflagged_after_password_change() {
    let mut form = valid_registration();
    let mut v = Validator::new(RuleSet::Register);
    assert_eq!(v.handle_blur(Field::ConfirmPassword, "Secret123!", &form), "");

    form.set_field(Field::Password, "NewSecret456!");
    let confirm = form.text(Field::ConfirmPassword).to_owned();
    assert_eq!(v.handle_blur(Field::ConfirmPassword, &confirm, &form), "Passwords do not match");
    assert!(!v.validate_all(&form));
}

#[test]
fn general_banner_is_independent_of_fields() {
    let mut v = Validator::new(RuleSet::Login);
    v.set_general(Some("Invalid email or password.".into()));
    assert_eq!(v.general(), Some("Invalid email or password."));
    let form = FormState::new([
        (Field::Email, FieldValue::from("ada@example.com")),
        (Field::Password, FieldValue::from("x")),
    ]);
    assert!(v.validate_all(&form));
    assert_eq!(v.general(), Some("Invalid email or password."));
    v.clear();
    assert_eq!(v.general(), None);
}
