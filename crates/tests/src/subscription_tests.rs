use pretty_assertions::assert_eq;
use shared_types::SubscriptionInfo;

#[test]
fn absent_subscription_is_not_subscribed() {
    let info = SubscriptionInfo::classify(None);
    assert!(!info.is_subscribed);
    assert_eq!(info.status, "Not Subscribed");
    assert_eq!(info.description, "No subscription found.");
    assert_eq!(info.color, "bg-red-900");
}

#[test]
fn canceled_subscription_is_not_subscribed() {
    let info = SubscriptionInfo::classify(Some("canceled"));
    assert!(!info.is_subscribed);
    assert_eq!(info.status, "Canceled");
    assert_eq!(info.icon, "X");
}

#[test]
fn every_known_code_maps_to_its_status() {
    let table = [
        ("trialing", "Trial", true),
        ("active", "Active", true),
        ("incomplete", "Incomplete", true),
        ("incomplete_expired", "Incomplete Expired", true),
        ("past_due", "Past Due", true),
        ("unpaid", "Unpaid", true),
        ("paused", "Paused", true),
        ("canceled", "Canceled", false),
    ];
    for (code, status, is_subscribed) in table {
        let info = SubscriptionInfo::classify(Some(code));
        assert_eq!(info.status, status, "status for {code}");
        assert_eq!(info.is_subscribed, is_subscribed, "is_subscribed for {code}");
    }
}

#[test]
fn unrecognized_code_is_unknown_but_still_subscribed() {
    // Only explicitly negative states clear is_subscribed.
    let info = SubscriptionInfo::classify(Some("bogus"));
    assert!(info.is_subscribed);
    assert_eq!(info.status, "Unknown");
    assert_eq!(info.icon, "AlertCircle");
}

#[test]
fn classification_is_stateless_between_calls() {
    let first = SubscriptionInfo::classify(Some("active"));
    let _ = SubscriptionInfo::classify(Some("canceled"));
    let again = SubscriptionInfo::classify(Some("active"));
    assert_eq!(first, again);
}
