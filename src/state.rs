use std::sync::Arc;

use crate::models::SubscriptionRecord;

// The dataset is built once at startup and shared read-only; every
// request derives its views from this plus the query's filter.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<Vec<SubscriptionRecord>>,
}

impl AppState {
    pub fn new(records: Vec<SubscriptionRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}
