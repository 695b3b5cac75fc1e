//! Pure field validators used at the input boundary.
//!
//! Validation failures never leave the form they occur in: they are rendered
//! next to the field and never reach the network or a toast surface.

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_FORMAT: &str = "Enter a valid email address";

/// Result of validating a single raw input string. Recomputed on every
/// change; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: String::new(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: message.into(),
        }
    }
}

/// Checks `local@domain.tld`: ASCII local part of letters, digits and
/// `._%+-`; domain of letters, digits and `.-`; TLD of at least two letters.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, host)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || host.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }

    let Some((domain, tld)) = host.rsplit_once('.') else {
        return false;
    };
    if domain.is_empty()
        || !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Stricter variant used where the backend is known to reject sloppy
/// addresses: additionally refuses consecutive dots anywhere in the address.
pub fn is_valid_email_strict(s: &str) -> bool {
    is_valid_email(s) && !s.contains("..")
}

/// Empty input is a required-error, not a format-error.
pub fn email_validation_error(s: &str) -> String {
    if s.trim().is_empty() {
        EMAIL_REQUIRED.to_string()
    } else if !is_valid_email(s) {
        EMAIL_FORMAT.to_string()
    } else {
        String::new()
    }
}

pub fn validate_email(s: &str) -> ValidationResult {
    let error = email_validation_error(s);
    if error.is_empty() {
        ValidationResult::ok()
    } else {
        ValidationResult::err(error)
    }
}

/// Required-field check for non-email inputs. Returns an empty string when
/// the value is present.
pub fn required_error(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("{label} is required")
    } else {
        String::new()
    }
}
