use crate::models::{LoginForm, SignupForm};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Error => "error",
            NoticeKind::Info => "ok",
        }
    }
}

/// A one-shot notification rendered at the top of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: NoticeKind,
}

impl Notice {
    pub const fn error(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            kind: NoticeKind::Error,
        }
    }

    pub const fn info(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            kind: NoticeKind::Info,
        }
    }
}

pub const MISSING_CREDENTIALS: Notice =
    Notice::error("Missing Credentials", "Please enter both email and password.");
pub const LOGIN_FAILED: Notice =
    Notice::error("Login Failed", "Please check your credentials and try again.");
pub const MISSING_FIELDS: Notice =
    Notice::error("Missing Fields", "Please fill in every field.");
pub const PASSWORD_MISMATCH: Notice =
    Notice::error("Password Mismatch", "Passwords do not match. Please try again.");
pub const PASSWORD_TOO_SHORT: Notice = Notice::error(
    "Password Too Short",
    "Password must be at least 6 characters long.",
);
pub const SIGNUP_UNAVAILABLE: Notice = Notice::info(
    "Signup Not Available Yet",
    "Your details look good, but accounts cannot be created here yet. Ask an administrator to add you, then sign in.",
);

pub fn validate_login(form: &LoginForm) -> Result<(), Notice> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(())
}

/// Checks presence first, then confirmation, then length.
pub fn validate_signup(form: &SignupForm) -> Result<(), Notice> {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(MISSING_FIELDS);
    }
    if form.password != form.confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}
