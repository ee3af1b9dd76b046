use tracing::debug;

use crate::models::{DashboardMeta, DashboardResponse, FilterSpec, SubscriptionRecord};
use crate::services::{aggregation, filtering, metrics};

/// Run the full pipeline for one filter state: filter the current
/// window, derive and filter the contiguous-prior comparison window,
/// aggregate the current window three ways, and compare the two
/// windows' totals into KPI deltas.
pub fn build_dashboard(records: &[SubscriptionRecord], spec: &FilterSpec) -> DashboardResponse {
    let current = filtering::filter_records(records, spec);

    let comparison_spec = metrics::previous_window(spec);
    let previous = filtering::filter_records(records, &comparison_spec);

    debug!(
        current = current.len(),
        previous = previous.len(),
        "dashboard windows filtered"
    );

    let kpis = metrics::compute_kpis(
        &metrics::window_totals(&current),
        &metrics::window_totals(&previous),
    );

    let meta = DashboardMeta {
        records: current.len(),
        start: spec.start_date,
        end: spec.end_date,
        comparison_start: comparison_spec.start_date,
        comparison_end: comparison_spec.end_date,
    };

    DashboardResponse {
        kpis,
        by_date: aggregation::aggregate_by_date(&current),
        by_platform: aggregation::aggregate_by_platform(&current),
        by_plan: aggregation::aggregate_by_plan(&current),
        meta,
    }
}
