use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for creating an account in an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Invalid e-mail."))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = crate::rules::validate_password))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "This field is required."))
    )]
    pub display_name: String,
}

/// Request DTO for saving a callable function endpoint on an organization's
/// assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct FunctionEndpointRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = crate::rules::validate_function_name))
    )]
    pub function_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = crate::rules::validate_endpoint))
    )]
    pub endpoint: String,
    /// Comma-separated origins allowed to call the endpoint.
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = crate::rules::validate_domain_list))
    )]
    pub allowed_domains: String,
}

/// Request DTO for an organization's form setup. A workspace needs at
/// least one form and one submit action before it can go live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct FormSetupRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "You must setup at least one form."))
    )]
    pub forms: Vec<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "You must setup at least one submit."))
    )]
    pub submits: Vec<String>,
}

/// Request DTO for a submit action's email notification settings. The
/// from/to fields accept either literal addresses or `{{field}}`
/// placeholders filled from the submitted form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SubmitNotificationRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = crate::rules::validate_email_or_field))
    )]
    pub from_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = crate::rules::validate_email_list_or_fields))
    )]
    pub to_emails: String,
}
