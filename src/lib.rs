pub mod app;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
