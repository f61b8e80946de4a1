use super::*;

#[test]
fn sign_in_requires_both_fields() {
    assert_eq!(validate_credentials(AuthMode::SignIn, "", "pw", ""), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials(AuthMode::SignIn, "alex", "", ""), Err(MISSING_FIELDS));
}

#[test]
fn sign_in_ignores_confirmation() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "alex", "pw", "other"),
        Ok(Credentials { username: "alex".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    assert_eq!(validate_credentials(AuthMode::SignUp, "alex", "pw", "pw2"), Err(PASSWORD_MISMATCH));
}

#[test]
fn sign_up_accepts_matching_confirmation() {
    assert!(validate_credentials(AuthMode::SignUp, "alex", "pw", "pw").is_ok());
}

#[test]
fn missing_fields_checked_before_mismatch() {
    assert_eq!(validate_credentials(AuthMode::SignUp, "", "pw", "x"), Err(MISSING_FIELDS));
}

#[test]
fn mode_labels() {
    assert_eq!(AuthMode::SignIn.submit_label(), "ENTER");
    assert_eq!(AuthMode::SignUp.submit_label(), "CREATE ACCOUNT");
    assert_eq!(AuthMode::SignIn.switch_link().2, "/signup");
    assert_eq!(AuthMode::SignUp.switch_link().2, "/signin");
}

#[test]
fn sign_in_lands_on_connect_and_sign_up_on_chat() {
    assert_eq!(AuthMode::SignIn.success_route(), "/connect");
    assert_eq!(AuthMode::SignUp.success_route(), "/chat");
}
