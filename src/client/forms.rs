// SPDX-License-Identifier: MIT

//! Auth form controller: a sign-in / sign-up / forgot-password state
//! machine with client-side validation.
//!
//! The validation rules here deliberately do not reuse the server-side
//! derive: the form must be able to reject input before any network call,
//! and the rules are testable without a server.

use crate::client::api::{ApiClient, ClientError, LoginPayload, RegisterPayload};
use crate::client::session::{KeyValueStorage, SessionStore};
use std::time::{Duration, Instant};

/// How long the transient success state is shown before the form closes.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(2);

/// Symbols accepted for the sign-up password rule.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
    Forgot,
}

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct AuthFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub phone: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.phone.is_none()
    }
}

/// Validate the form for the given mode. Runs entirely client-side.
pub fn validate(mode: AuthMode, form: &AuthFormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    errors.email = validate_email(&form.email);

    if mode != AuthMode::Forgot {
        errors.password = validate_password(mode, &form.password);
    }

    if mode == AuthMode::SignUp {
        if form.confirm_password.is_empty() {
            errors.confirm_password = Some("Please confirm your password".to_string());
        } else if form.password != form.confirm_password {
            errors.confirm_password = Some("Passwords do not match".to_string());
        }

        errors.first_name = validate_name(&form.first_name, "First name");
        errors.last_name = validate_name(&form.last_name, "Last name");

        let phone = form.phone.trim();
        if !phone.is_empty() && !phone_shape_ok(phone) {
            errors.phone = Some("Please enter a valid phone number".to_string());
        }
    }

    errors
}

fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !email_shape_ok(email) {
        return Some("Please enter a valid email address".to_string());
    }
    if email.contains("..") || email.starts_with('.') || email.ends_with('.') {
        return Some("Email format is invalid".to_string());
    }
    if !email.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return Some("Email must start with a letter or number".to_string());
    }
    None
}

/// `local@domain.tld` with the usual character sets: the local part may use
/// letters, digits and `._%+-`; the domain letters, digits, dots and
/// hyphens; the TLD at least two letters.
fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    if domain.is_empty()
        || !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c))
    {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn validate_password(mode: AuthMode, password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters long".to_string());
    }
    if mode == AuthMode::SignUp {
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            return Some(
                "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                    .to_string(),
            );
        }
        if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
            return Some("Password must contain at least one special character".to_string());
        }
    }
    None
}

fn validate_name(name: &str, label: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return Some(format!("{} is required", label));
    }
    if name.len() < 2 {
        return Some(format!("{} must be at least 2 characters", label));
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Some(format!("{} can only contain letters", label));
    }
    None
}

/// Optional leading `+`, then 10-13 digits once spaces and dashes are
/// stripped.
fn phone_shape_ok(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    (10..=13).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// The four user-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    AccountExists,
    InvalidCredentials,
    AccountNotFound,
    Generic,
}

impl AuthErrorKind {
    /// Message shown to the user for this category.
    pub fn user_message(self) -> &'static str {
        match self {
            AuthErrorKind::AccountExists => {
                "An account with this email already exists. Please sign in instead."
            }
            AuthErrorKind::InvalidCredentials => {
                "Invalid email or password. Please check your credentials."
            }
            AuthErrorKind::AccountNotFound => {
                "No account found with this email. Please sign up first."
            }
            AuthErrorKind::Generic => "Something went wrong. Please try again later.",
        }
    }
}

/// Classify a failed API call into a user-facing category.
///
/// The structured `error` code is the primary key; the message substrings
/// are kept as a fallback for servers that only send text.
pub fn classify_error(error: &ClientError) -> AuthErrorKind {
    let ClientError::Api { code, message, .. } = error else {
        return AuthErrorKind::Generic;
    };

    match code.as_deref() {
        Some("already_exists") => return AuthErrorKind::AccountExists,
        Some("invalid_credentials") => return AuthErrorKind::InvalidCredentials,
        Some("not_found") => return AuthErrorKind::AccountNotFound,
        _ => {}
    }

    if message.contains("already exists") {
        AuthErrorKind::AccountExists
    } else if message.contains("Invalid email or password") {
        AuthErrorKind::InvalidCredentials
    } else if message.contains("not found") {
        AuthErrorKind::AccountNotFound
    } else {
        AuthErrorKind::Generic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormPhase {
    Editing,
    Success { shown_at: Instant },
}

/// Drives the auth form: validates, submits, reconciles the outcome into
/// the session store, and times the transient success state.
pub struct AuthFormController<S: KeyValueStorage> {
    pub mode: AuthMode,
    pub form: AuthFormData,
    pub errors: FieldErrors,
    pub api_error: Option<AuthErrorKind>,
    phase: FormPhase,
    api: ApiClient,
    session: SessionStore<S>,
}

impl<S: KeyValueStorage> AuthFormController<S> {
    pub fn new(api: ApiClient, session: SessionStore<S>) -> Self {
        Self {
            mode: AuthMode::SignIn,
            form: AuthFormData::default(),
            errors: FieldErrors::default(),
            api_error: None,
            phase: FormPhase::Editing,
            api,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Switch mode, resetting the form.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.form = AuthFormData::default();
        self.errors = FieldErrors::default();
        self.api_error = None;
        self.phase = FormPhase::Editing;
    }

    /// Validate and submit. Returns true on success.
    ///
    /// Validation failures never reach the network. The forgot-password
    /// mode is a dead end: it shows the success state without calling any
    /// endpoint.
    pub async fn submit(&mut self) -> bool {
        self.api_error = None;
        self.errors = validate(self.mode, &self.form);
        if !self.errors.is_empty() {
            return false;
        }

        let email = self.form.email.trim().to_lowercase();

        let result = match self.mode {
            AuthMode::Forgot => {
                self.phase = FormPhase::Success {
                    shown_at: Instant::now(),
                };
                return true;
            }
            AuthMode::SignIn => {
                self.api
                    .login(&LoginPayload {
                        email,
                        password: self.form.password.clone(),
                    })
                    .await
            }
            AuthMode::SignUp => {
                let phone = self.form.phone.trim();
                self.api
                    .register(&RegisterPayload {
                        first_name: self.form.first_name.trim().to_string(),
                        last_name: self.form.last_name.trim().to_string(),
                        email,
                        password: self.form.password.clone(),
                        phone: (!phone.is_empty()).then(|| phone.to_string()),
                    })
                    .await
            }
        };

        match result {
            Ok(auth) => {
                self.session.store_auth(&auth.token, &auth.user);
                self.phase = FormPhase::Success {
                    shown_at: Instant::now(),
                };
                true
            }
            Err(e) => {
                self.api_error = Some(classify_error(&e));
                false
            }
        }
    }

    pub fn is_showing_success(&self) -> bool {
        matches!(self.phase, FormPhase::Success { .. })
    }

    /// Whether the success state has been shown long enough to close.
    pub fn should_close(&self, now: Instant) -> bool {
        match self.phase {
            FormPhase::Success { shown_at } => now.duration_since(shown_at) >= SUCCESS_DISPLAY,
            FormPhase::Editing => false,
        }
    }

    /// Close the form, resetting it for the next open.
    pub fn close(&mut self) {
        self.form = AuthFormData::default();
        self.errors = FieldErrors::default();
        self.api_error = None;
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_form() -> AuthFormData {
        AuthFormData {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: "Abcdef1!".to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_valid_signup_form_passes() {
        assert!(validate(AuthMode::SignUp, &signup_form()).is_empty());
    }

    #[test]
    fn test_short_password_fails_with_length_message() {
        let mut form = signup_form();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();

        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_signin_skips_composition_rules() {
        let form = AuthFormData {
            email: "jane@x.com".to_string(),
            password: "lowercaseonly".to_string(),
            ..Default::default()
        };
        assert!(validate(AuthMode::SignIn, &form).is_empty());
    }

    #[test]
    fn test_signup_requires_composition() {
        let mut form = signup_form();
        form.password = "abcdefg1!".to_string();
        form.confirm_password = form.password.clone();
        let errors = validate(AuthMode::SignUp, &form);
        assert!(errors.password.as_deref().unwrap().contains("uppercase"));

        form.password = "Abcdefg1".to_string();
        form.confirm_password = form.password.clone();
        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must contain at least one special character")
        );
    }

    #[test]
    fn test_confirm_password_must_match() {
        let mut form = signup_form();
        form.confirm_password = "Different1!".to_string();
        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Some("Email is required".to_string()));
        assert_eq!(
            validate_email("not-an-email"),
            Some("Please enter a valid email address".to_string())
        );
        assert_eq!(
            validate_email("a@b"),
            Some("Please enter a valid email address".to_string())
        );
        assert_eq!(
            validate_email("jane..doe@x.com"),
            Some("Email format is invalid".to_string())
        );
        assert_eq!(
            validate_email(".jane@x.com"),
            Some("Email format is invalid".to_string())
        );
        assert_eq!(
            validate_email("_jane@x.com"),
            Some("Email must start with a letter or number".to_string())
        );
        assert_eq!(validate_email("jane.doe@fit-zone.co.uk"), None);
        assert_eq!(validate_email("jane@x.com"), None);
    }

    #[test]
    fn test_name_rules() {
        let mut form = signup_form();
        form.first_name = "J".to_string();
        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(
            errors.first_name.as_deref(),
            Some("First name must be at least 2 characters")
        );

        form.first_name = "J4ne".to_string();
        let errors = validate(AuthMode::SignUp, &form);
        assert_eq!(
            errors.first_name.as_deref(),
            Some("First name can only contain letters")
        );

        form.first_name = "Mary Jane".to_string();
        let errors = validate(AuthMode::SignUp, &form);
        assert!(errors.first_name.is_none());
    }

    #[test]
    fn test_phone_rules() {
        assert!(phone_shape_ok("+91 98765 43210"));
        assert!(phone_shape_ok("9876543210"));
        assert!(phone_shape_ok("98-76-54-32-10"));
        assert!(!phone_shape_ok("12345"));
        assert!(!phone_shape_ok("98765432101234567"));
        assert!(!phone_shape_ok("phone-number"));

        // Optional: empty phone is fine on sign-up.
        let form = signup_form();
        assert!(validate(AuthMode::SignUp, &form).phone.is_none());
    }

    #[test]
    fn test_forgot_mode_only_checks_email() {
        let form = AuthFormData {
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        assert!(validate(AuthMode::Forgot, &form).is_empty());
    }

    #[test]
    fn test_classify_by_code() {
        let err = ClientError::Api {
            status: 400,
            code: Some("already_exists".to_string()),
            message: "whatever".to_string(),
        };
        assert_eq!(classify_error(&err), AuthErrorKind::AccountExists);

        let err = ClientError::Api {
            status: 400,
            code: Some("invalid_credentials".to_string()),
            message: "whatever".to_string(),
        };
        assert_eq!(classify_error(&err), AuthErrorKind::InvalidCredentials);
    }

    #[test]
    fn test_classify_by_message_fallback() {
        let err = ClientError::Api {
            status: 400,
            code: None,
            message: "User already exists with this email".to_string(),
        };
        assert_eq!(classify_error(&err), AuthErrorKind::AccountExists);

        let err = ClientError::Api {
            status: 400,
            code: None,
            message: "Invalid email or password".to_string(),
        };
        assert_eq!(classify_error(&err), AuthErrorKind::InvalidCredentials);

        let err = ClientError::Api {
            status: 404,
            code: None,
            message: "User not found".to_string(),
        };
        assert_eq!(classify_error(&err), AuthErrorKind::AccountNotFound);

        let err = ClientError::Api {
            status: 500,
            code: None,
            message: "Server error".to_string(),
        };
        assert_eq!(classify_error(&err), AuthErrorKind::Generic);
    }
}
