use chrono::Duration;

use crate::models::{FilterSpec, KpiReport, MetricPair, MetricTotals, SubscriptionRecord};

/// Sum every record into one totals struct for a whole window.
pub fn window_totals(records: &[SubscriptionRecord]) -> MetricTotals {
    records.iter().fold(MetricTotals::default(), |mut acc, r| {
        acc.add(r);
        acc
    })
}

/// The comparison window: same inclusive length, ending the day before
/// the current window starts. No overlap, no gap. Platform and plan
/// narrowing carry over unchanged.
pub fn previous_window(spec: &FilterSpec) -> FilterSpec {
    let span_days = (spec.end_date - spec.start_date).num_days();
    let shift = Duration::days(span_days + 1);

    FilterSpec {
        start_date: spec.start_date - shift,
        end_date: spec.end_date - shift,
        platform: spec.platform,
        plan_type: spec.plan_type,
    }
}

/// Period-over-period percentage change with the zero-baseline rule:
/// growing from a zero baseline reads as +100%, staying at zero reads
/// as 0%. Deliberate business rule, not an artifact.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Share of trials that converted, in percent. Zero trials reads as a
/// 0% rate rather than a division error.
pub fn trial_conversion_rate(conversions: u32, trials: u32) -> f64 {
    if trials == 0 {
        0.0
    } else {
        f64::from(conversions) / f64::from(trials) * 100.0
    }
}

/// Combine the current and comparison window totals into the five KPI
/// pairs the summary cards show.
pub fn compute_kpis(current: &MetricTotals, previous: &MetricTotals) -> KpiReport {
    let current_rate = trial_conversion_rate(current.trial_conversions, current.total_trials);
    let previous_rate = trial_conversion_rate(previous.trial_conversions, previous.total_trials);

    KpiReport {
        active_subscriptions: pair(
            f64::from(current.active_subscriptions),
            f64::from(previous.active_subscriptions),
        ),
        new_subscriptions: pair(
            f64::from(current.new_subscriptions),
            f64::from(previous.new_subscriptions),
        ),
        cancellations: pair(
            f64::from(current.cancellations),
            f64::from(previous.cancellations),
        ),
        mrr: pair(current.mrr, previous.mrr),
        trial_conversion_rate: pair(current_rate, previous_rate),
    }
}

fn pair(current: f64, previous: f64) -> MetricPair {
    MetricPair {
        value: current,
        percent_change: percent_change(current, previous),
    }
}
