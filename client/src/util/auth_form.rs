//! Input checks shared by the sign-in and sign-up forms.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::types::Credentials;

pub const MISSING_FIELDS: &str = "Please fill in all fields!";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";

/// Which of the two auth screens a form is rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "SIGN IN",
            Self::SignUp => "SIGN UP",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "ENTER",
            Self::SignUp => "CREATE ACCOUNT",
        }
    }

    /// Prompt, link text, and target route for switching screens.
    #[must_use]
    pub fn switch_link(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::SignIn => ("Need an account?", "Sign Up", "/signup"),
            Self::SignUp => ("Already have an account?", "Sign In", "/signin"),
        }
    }

    /// Where a successful submit lands.
    #[must_use]
    pub fn success_route(self) -> &'static str {
        match self {
            Self::SignIn => "/connect",
            Self::SignUp => "/chat",
        }
    }
}

/// Validate the form before anything is sent.
///
/// Values are passed through untrimmed; only emptiness is checked.
///
/// # Errors
///
/// Returns the inline message for an empty field or, on sign up, a
/// confirmation that does not match.
pub fn validate_credentials(
    mode: AuthMode,
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if mode == AuthMode::SignUp && password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}
