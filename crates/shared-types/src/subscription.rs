use serde::{Deserialize, Serialize};

/// Display descriptor for an organization's subscription state: a badge
/// label, a longer explanation, and the color/icon the UI should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub is_subscribed: bool,
    pub status: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

impl SubscriptionInfo {
    fn descriptor(is_subscribed: bool, status: &str, description: &str, color: &str, icon: &str) -> Self {
        Self {
            is_subscribed,
            status: status.into(),
            description: description.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Classify a raw subscription status code into a display descriptor.
    ///
    /// Only the explicitly negative states (no subscription at all, an
    /// empty code, `canceled`) clear `is_subscribed`; an unrecognized code
    /// keeps it set and gets the Unknown badge.
    pub fn classify(code: Option<&str>) -> Self {
        match code {
            None => Self::descriptor(
                false,
                "Not Subscribed",
                "No subscription found.",
                "bg-red-900",
                "AlertCircle",
            ),
            Some(code) if code.is_empty() || code == "canceled" => Self::descriptor(
                false,
                "Canceled",
                "The subscription has been canceled.",
                "bg-red-600",
                "X",
            ),
            Some("trialing") => Self::descriptor(
                true,
                "Trial",
                "The subscription is currently in a trial period.",
                "bg-green-600",
                "Check",
            ),
            Some("active") => Self::descriptor(
                true,
                "Active",
                "The subscription is in good standing.",
                "bg-green-600",
                "Check",
            ),
            Some("incomplete") => Self::descriptor(
                true,
                "Incomplete",
                "A successful payment needs to be made within 23 hours to activate the subscription.",
                "bg-amber-500",
                "Hourglass",
            ),
            Some("incomplete_expired") => Self::descriptor(
                true,
                "Incomplete Expired",
                "The initial payment on the subscription failed and no successful payment was made within 23 hours of creating the subscription.",
                "bg-red-600",
                "AlertCircle",
            ),
            Some("past_due") => Self::descriptor(
                true,
                "Past Due",
                "Payment on the latest finalized invoice either failed or wasn't attempted.",
                "bg-red-600",
                "AlertCircle",
            ),
            Some("unpaid") => Self::descriptor(
                true,
                "Unpaid",
                "The latest invoice hasn't been paid but the subscription remains in place.",
                "bg-red-600",
                "AlertCircle",
            ),
            Some("paused") => Self::descriptor(
                true,
                "Paused",
                "The subscription has ended its trial period without a default payment method.",
                "bg-amber-500",
                "PauseCircle",
            ),
            Some(_) => Self::descriptor(
                true,
                "Unknown",
                "The subscription status is unknown.",
                "bg-red-600",
                "AlertCircle",
            ),
        }
    }
}
