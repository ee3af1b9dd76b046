use crate::models::{FilterSpec, SubscriptionRecord};

/// Whether a record falls inside the filter: date within the inclusive
/// window AND platform accepted AND plan accepted.
///
/// An inverted window (`start_date > end_date`) matches nothing; the
/// predicate never fails.
pub fn matches(record: &SubscriptionRecord, spec: &FilterSpec) -> bool {
    let date_match = record.date >= spec.start_date && record.date <= spec.end_date;
    let platform_match = spec.platform.accepts(record.platform);
    let plan_match = spec.plan_type.accepts(record.plan_type);

    date_match && platform_match && plan_match
}

pub fn filter_records(records: &[SubscriptionRecord], spec: &FilterSpec) -> Vec<SubscriptionRecord> {
    records
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect()
}
