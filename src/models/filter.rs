use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Platform, PlanType};

/// Platform selector: either the wildcard or a concrete platform.
/// "All" exists only at the filter level, never on records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformFilter {
    All,
    #[serde(rename = "iOS")]
    Ios,
    Android,
}

impl PlatformFilter {
    pub fn accepts(&self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Ios => platform == Platform::Ios,
            PlatformFilter::Android => platform == Platform::Android,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanFilter {
    All,
    Monthly,
    Yearly,
}

impl PlanFilter {
    pub fn accepts(&self, plan_type: PlanType) -> bool {
        match self {
            PlanFilter::All => true,
            PlanFilter::Monthly => plan_type == PlanType::Monthly,
            PlanFilter::Yearly => plan_type == PlanType::Yearly,
        }
    }
}

/// The full filter a caller applies to the dataset: an inclusive date
/// window plus optional platform/plan narrowing.
///
/// `start_date <= end_date` is expected but not required; an inverted
/// window simply matches no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub platform: PlatformFilter,
    pub plan_type: PlanFilter,
}
