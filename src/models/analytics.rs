use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Platform, PlanType, SubscriptionRecord};

/// Running sums of every numeric field on a record. All fields are
/// additive, including `active_subscriptions`: a per-segment daily
/// snapshot that this system deliberately sums across segments and
/// days (see DESIGN.md for the policy choice).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTotals {
    pub active_subscriptions: u32,
    pub new_subscriptions: u32,
    pub cancellations: u32,
    pub mrr: f64,
    pub total_trials: u32,
    pub trial_conversions: u32,
}

impl MetricTotals {
    // Saturating sums keep the fold total even for records at the top
    // of the u32 range.
    pub fn add(&mut self, record: &SubscriptionRecord) {
        self.active_subscriptions = self
            .active_subscriptions
            .saturating_add(record.active_subscriptions);
        self.new_subscriptions = self
            .new_subscriptions
            .saturating_add(record.new_subscriptions);
        self.cancellations = self.cancellations.saturating_add(record.cancellations);
        self.mrr += record.mrr;
        self.total_trials = self.total_trials.saturating_add(record.total_trials);
        self.trial_conversions = self
            .trial_conversions
            .saturating_add(record.trial_conversions);
    }
}

/// One point of the time series: all segment records for a calendar
/// day, summed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateBucket {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub totals: MetricTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformBucket {
    pub platform: Platform,
    #[serde(flatten)]
    pub totals: MetricTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBucket {
    pub plan_type: PlanType,
    #[serde(flatten)]
    pub totals: MetricTotals,
}

/// Current-period value of one KPI plus its signed percentage change
/// against the comparison window. The sign is raw for every metric;
/// deciding whether "up" is good (it is not for cancellations) is left
/// to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPair {
    pub value: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiReport {
    pub active_subscriptions: MetricPair,
    pub new_subscriptions: MetricPair,
    pub cancellations: MetricPair,
    pub mrr: MetricPair,
    pub trial_conversion_rate: MetricPair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    pub records: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub comparison_start: NaiveDate,
    pub comparison_end: NaiveDate,
}

/// Everything a dashboard render needs for one filter state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub kpis: KpiReport,
    pub by_date: Vec<DateBucket>,
    pub by_platform: Vec<PlatformBucket>,
    pub by_plan: Vec<PlanBucket>,
    pub meta: DashboardMeta,
}
