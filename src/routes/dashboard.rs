use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{DashboardResponse, FilterSpec, PlanFilter, PlatformFilter, SubscriptionRecord};
use crate::services::{dashboard_service, filtering};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/records", get(get_records))
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    start_date: Option<String>,
    end_date: Option<String>,
    platform: Option<String>,
    plan_type: Option<String>,
}

impl DashboardQuery {
    /// Resolve the raw query into a FilterSpec. Missing dates default
    /// to the trailing 30 days ending today; missing segment filters
    /// default to the wildcard. Malformed dates and unknown segment
    /// labels are rejected here, at the boundary.
    fn resolve(&self) -> Result<FilterSpec, AppError> {
        let today = Utc::now().date_naive();

        let end_date = match &self.end_date {
            Some(raw) => parse_date("end_date", raw)?,
            None => today,
        };
        let start_date = match &self.start_date {
            Some(raw) => parse_date("start_date", raw)?,
            None => end_date - Duration::days(30),
        };

        let platform = match self.platform.as_deref() {
            None | Some("All") => PlatformFilter::All,
            Some("iOS") => PlatformFilter::Ios,
            Some("Android") => PlatformFilter::Android,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "unknown platform: {other} (expected All, iOS or Android)"
                )))
            }
        };

        let plan_type = match self.plan_type.as_deref() {
            None | Some("All") => PlanFilter::All,
            Some("Monthly") => PlanFilter::Monthly,
            Some("Yearly") => PlanFilter::Yearly,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "unknown plan_type: {other} (expected All, Monthly or Yearly)"
                )))
            }
        };

        Ok(FilterSpec {
            start_date,
            end_date,
            platform,
            plan_type,
        })
    }
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid {field}: {raw} (expected YYYY-MM-DD)")))
}

async fn get_dashboard(
    Query(params): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let spec = params.resolve()?;
    Ok(Json(dashboard_service::build_dashboard(&state.records, &spec)))
}

/// Raw rows behind the charts, filtered the same way (raw-data view).
async fn get_records(
    Query(params): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SubscriptionRecord>>, AppError> {
    let spec = params.resolve()?;
    Ok(Json(filtering::filter_records(&state.records, &spec)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_trailing_thirty_days() {
        let query = DashboardQuery {
            start_date: None,
            end_date: None,
            platform: None,
            plan_type: None,
        };

        let spec = query.resolve().unwrap();
        let today = Utc::now().date_naive();
        assert_eq!(spec.end_date, today);
        assert_eq!(spec.start_date, today - Duration::days(30));
        assert_eq!(spec.platform, PlatformFilter::All);
        assert_eq!(spec.plan_type, PlanFilter::All);
    }

    #[test]
    fn test_resolve_parses_explicit_window_and_segments() {
        let query = DashboardQuery {
            start_date: Some("2024-02-01".into()),
            end_date: Some("2024-02-28".into()),
            platform: Some("iOS".into()),
            plan_type: Some("Yearly".into()),
        };

        let spec = query.resolve().unwrap();
        assert_eq!(spec.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(spec.end_date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(spec.platform, PlatformFilter::Ios);
        assert_eq!(spec.plan_type, PlanFilter::Yearly);
    }

    #[test]
    fn test_resolve_rejects_unknown_platform() {
        let query = DashboardQuery {
            start_date: None,
            end_date: None,
            platform: Some("Windows".into()),
            plan_type: None,
        };

        assert!(matches!(query.resolve(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_resolve_rejects_malformed_date() {
        let query = DashboardQuery {
            start_date: Some("01/02/2024".into()),
            end_date: None,
            platform: None,
            plan_type: None,
        };

        assert!(matches!(query.resolve(), Err(AppError::Validation(_))));
    }
}
