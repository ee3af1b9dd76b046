use std::collections::BTreeMap;

use crate::models::{DateBucket, MetricTotals, PlanBucket, PlatformBucket, SubscriptionRecord};

/// Group records by calendar day and sum every numeric field across
/// the platform/plan segments of that day. Output is sorted ascending
/// by date (this is the series the trend charts draw).
pub fn aggregate_by_date(records: &[SubscriptionRecord]) -> Vec<DateBucket> {
    let grouped = fold_by_key(records, |r| r.date);

    grouped
        .into_iter()
        .map(|(date, totals)| DateBucket { date, totals })
        .collect()
}

/// Group records by platform, summed across dates and plans.
pub fn aggregate_by_platform(records: &[SubscriptionRecord]) -> Vec<PlatformBucket> {
    let grouped = fold_by_key(records, |r| r.platform);

    grouped
        .into_iter()
        .map(|(platform, totals)| PlatformBucket { platform, totals })
        .collect()
}

/// Group records by plan type, summed across dates and platforms.
pub fn aggregate_by_plan(records: &[SubscriptionRecord]) -> Vec<PlanBucket> {
    let grouped = fold_by_key(records, |r| r.plan_type);

    grouped
        .into_iter()
        .map(|(plan_type, totals)| PlanBucket { plan_type, totals })
        .collect()
}

// BTreeMap keeps the buckets ordered by their typed key; duplicate
// keys fold into the same bucket instead of double-counting rows.
fn fold_by_key<K, F>(records: &[SubscriptionRecord], key: F) -> BTreeMap<K, MetricTotals>
where
    K: Ord,
    F: Fn(&SubscriptionRecord) -> K,
{
    records.iter().fold(BTreeMap::new(), |mut acc, record| {
        acc.entry(key(record)).or_default().add(record);
        acc
    })
}
