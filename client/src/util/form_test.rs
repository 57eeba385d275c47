use super::*;

fn login_form() -> FormState {
    FormState::blank([Field::Email, Field::Password, Field::RememberMe])
}

#[test]
fn blank_form_uses_input_kind_defaults() {
    let form = login_form();
    assert_eq!(form.text(Field::Email), "");
    assert!(!form.checked(Field::RememberMe));
    assert_eq!(form, FormState::new([
        (Field::Email, FieldValue::from("")),
        (Field::Password, FieldValue::from("")),
        (Field::RememberMe, FieldValue::from(false)),
    ]));
    assert!(form.is_pristine());
}

#[test]
fn set_field_merges_one_field() {
    let mut form = login_form();
    form.set_field(Field::Email, "ada@example.com");
    assert_eq!(form.text(Field::Email), "ada@example.com");
    assert_eq!(form.text(Field::Password), "");
    assert!(!form.is_pristine());
}

#[test]
fn handle_change_respects_input_kind() {
    let mut form = login_form();
    form.handle_change(Field::RememberMe, "on", true);
    form.handle_change(Field::Password, "  spaced  ", true);
    assert!(form.checked(Field::RememberMe));
    assert_eq!(form.text(Field::Password), "  spaced  ");
}

#[test]
fn numeric_input_stays_raw_text() {
    let mut form = FormState::blank([Field::Amount]);
    form.handle_change(Field::Amount, "12.50", false);
    assert_eq!(form.text(Field::Amount), "12.50");
    assert!(!form.checked(Field::Amount));
}

#[test]
fn reset_restores_exact_initial_mapping() {
    let mut form = FormState::new([
        (Field::Email, FieldValue::from("preset@example.com")),
        (Field::RememberMe, FieldValue::from(true)),
    ]);
    let before = form.clone();

    form.set_field(Field::Email, "changed@example.com");
    form.set_field(Field::RememberMe, false);
    form.set_field(Field::Password, "added later");
    assert!(!form.is_pristine());

    form.reset();
    assert_eq!(form, before);
    assert!(form.is_pristine());
}

#[test]
fn text_of_checkbox_is_empty() {
    let form = login_form();
    assert_eq!(form.text(Field::RememberMe), "");
    assert!(!form.checked(Field::Email));
}

#[test]
fn field_names_match_backend_keys() {
    assert_eq!(Field::ConfirmPassword.name(), "confirmPassword");
    assert_eq!(Field::FirstName.name(), "first_name");
    assert_eq!(Field::InviteCode.name(), "invite_code");
    assert_eq!(Field::GroupName.name(), Field::ExpenseName.name());
}
