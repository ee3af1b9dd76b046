use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// App store a subscription was sold through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    Android,
}

/// Billing cadence of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanType {
    Monthly,
    Yearly,
}

// One observation: the state of a single (platform, plan) segment on a
// single calendar day. Counts are daily snapshots/flows; `mrr` is the
// normalized monthly revenue for the segment on that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub date: NaiveDate,
    pub platform: Platform,
    pub plan_type: PlanType,
    pub active_subscriptions: u32,
    pub new_subscriptions: u32,
    pub cancellations: u32,
    pub mrr: f64,
    pub total_trials: u32,
    pub trial_conversions: u32,
}
