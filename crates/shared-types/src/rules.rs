//! Form-input validation rules shared by every settings form in the app.
//!
//! Each function follows the `validator` custom-rule contract so the
//! request DTOs in [`crate::requests`] can reference them from
//! `#[validate(custom(...))]` attributes.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{ValidateEmail, ValidationError};

static FUNCTION_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{1,64}$").unwrap());

static ENDPOINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://([a-zA-Z0-9]+\.)?[a-zA-Z0-9][a-zA-Z0-9-]+(\.[a-zA-Z]{2,6})?(:\d{1,5})?(/\S*)?$")
        .unwrap()
});

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://([a-zA-Z0-9]+\.)?[a-zA-Z0-9][a-zA-Z0-9-]+(\.[a-zA-Z]{2,6})?(:\d{1,5})?$")
        .unwrap()
});

static LOCALHOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://localhost(:\d{1,5})?$").unwrap());

static IP_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(:\d{1,5})?$").unwrap()
});

/// Characters accepted as the "special" class in passwords.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

fn rule_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Template field placeholder: `{{field_name}}`.
fn is_field_placeholder(value: &str) -> bool {
    value.starts_with("{{") && value.ends_with("}}")
}

/// Function names: 1-64 characters, letters, numbers, underscores, dashes.
pub fn validate_function_name(value: &str) -> Result<(), ValidationError> {
    if FUNCTION_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(rule_error(
            "function_name",
            "The function name must be 1-64 characters and can only contain letters, numbers, underscores, and dashes.",
        ))
    }
}

/// Endpoint URLs must include the protocol (http or https) and may carry a
/// port and path.
pub fn validate_endpoint(value: &str) -> Result<(), ValidationError> {
    if ENDPOINT_RE.is_match(value) {
        Ok(())
    } else {
        Err(rule_error(
            "endpoint",
            format!("\"{value}\" is not a valid URL. The URL must include the protocol (http or https) and the path."),
        ))
    }
}

/// Comma-separated list of allowed origins: each entry must be a domain,
/// `localhost`, or an IP address, protocol included.
pub fn validate_domain_list(value: &str) -> Result<(), ValidationError> {
    for domain in value.split(',') {
        if !DOMAIN_RE.is_match(domain)
            && !LOCALHOST_RE.is_match(domain)
            && !IP_ADDRESS_RE.is_match(domain)
        {
            return Err(rule_error(
                "domains",
                format!("\"{domain}\" is not a valid domain or IP address. The domain or IP address must include the protocol (http or https)."),
            ));
        }
    }
    Ok(())
}

/// Comma-separated list of email addresses.
pub fn validate_email_list(value: &str) -> Result<(), ValidationError> {
    for email in value.split(',') {
        if !email.validate_email() {
            return Err(rule_error(
                "to_emails",
                format!("\"{email}\" is not a valid email address"),
            ));
        }
    }
    Ok(())
}

/// A single email address, or a `{{field}}` placeholder resolved at send
/// time from the submitted form.
pub fn validate_email_or_field(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() || is_field_placeholder(value) {
        Ok(())
    } else {
        Err(rule_error(
            "email_or_field",
            format!("Invalid e-mail or field. If you want to use a field, it must be wrapped in double curly braces, e.g. {{{{{value}}}}}"),
        ))
    }
}

/// Comma-separated list where each entry is an email address or a
/// `{{field}}` placeholder.
pub fn validate_email_list_or_fields(value: &str) -> Result<(), ValidationError> {
    for email in value.split(',') {
        if !email.validate_email() && !is_field_placeholder(email) {
            return Err(rule_error(
                "emails_or_fields",
                format!("\"{email}\" is not a valid email address or field. If you want to use a field, it must be wrapped in double curly braces, e.g. {{{{{email}}}}}"),
            ));
        }
    }
    Ok(())
}

/// Passwords: at least 8 characters drawn from letters, digits, and
/// `@$!%*?&`, with at least one of each class present.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    let strong = value.len() >= 8
        && allowed
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if strong {
        Ok(())
    } else {
        Err(rule_error(
            "password",
            "Password must have at least 8 characters, including uppercase and lowercase letters, numbers, and a special character",
        ))
    }
}
