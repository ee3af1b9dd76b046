mod analytics;
mod filter;
mod record;

pub use analytics::{
    DashboardMeta, DashboardResponse, DateBucket, KpiReport, MetricPair, MetricTotals,
    PlanBucket, PlatformBucket,
};
pub use filter::{FilterSpec, PlanFilter, PlatformFilter};
pub use record::{PlanType, Platform, SubscriptionRecord};
