/// Wire-format tests for the dashboard API payloads: the frontend
/// consumes camelCase keys, "iOS"/"Android" platform labels and flat
/// bucket objects, so the serde contract is pinned here.
use chrono::NaiveDate;
use serde_json::json;

use subscope_backend::models::{
    DateBucket, MetricTotals, PlanType, Platform, PlatformBucket, SubscriptionRecord,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn test_record_serializes_with_camel_case_and_platform_labels() {
    let record = SubscriptionRecord {
        date: day(1),
        platform: Platform::Ios,
        plan_type: PlanType::Monthly,
        active_subscriptions: 100,
        new_subscriptions: 10,
        cancellations: 2,
        mrr: 999.0,
        total_trials: 20,
        trial_conversions: 5,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "date": "2024-01-01",
            "platform": "iOS",
            "planType": "Monthly",
            "activeSubscriptions": 100,
            "newSubscriptions": 10,
            "cancellations": 2,
            "mrr": 999.0,
            "totalTrials": 20,
            "trialConversions": 5,
        })
    );
}

#[test]
fn test_date_bucket_serializes_flat() {
    let bucket = DateBucket {
        date: day(2),
        totals: MetricTotals {
            active_subscriptions: 180,
            new_subscriptions: 18,
            cancellations: 3,
            mrr: 1800.0,
            total_trials: 35,
            trial_conversions: 8,
        },
    };

    let value = serde_json::to_value(&bucket).unwrap();
    // Totals are flattened next to the key, not nested.
    assert_eq!(value["date"], "2024-01-02");
    assert_eq!(value["activeSubscriptions"], 180);
    assert_eq!(value["mrr"], 1800.0);
    assert!(value.get("totals").is_none());
}

#[test]
fn test_platform_bucket_round_trips() {
    let bucket = PlatformBucket {
        platform: Platform::Android,
        totals: MetricTotals::default(),
    };

    let text = serde_json::to_string(&bucket).unwrap();
    let back: PlatformBucket = serde_json::from_str(&text).unwrap();
    assert_eq!(back.platform, Platform::Android);
}

#[test]
fn test_record_rejects_wildcard_platform() {
    // "All" is a filter concept only; records must carry a concrete
    // platform.
    let raw = json!({
        "date": "2024-01-01",
        "platform": "All",
        "planType": "Monthly",
        "activeSubscriptions": 1,
        "newSubscriptions": 0,
        "cancellations": 0,
        "mrr": 0.0,
        "totalTrials": 0,
        "trialConversions": 0,
    });

    assert!(serde_json::from_value::<SubscriptionRecord>(raw).is_err());
}
