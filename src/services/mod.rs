pub mod aggregation;
pub mod dashboard_service;
pub mod filtering;
pub mod generator;
pub mod metrics;
