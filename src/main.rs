use std::net::SocketAddr;

use tokio::net::TcpListener;

use subscope_backend::app;
use subscope_backend::logging::{self, LoggingConfig};
use subscope_backend::services::generator;
use subscope_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let history_days: u32 = std::env::var("HISTORY_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(90);

    // The dataset is an explicit collaborator: built once here and
    // handed to the core by reference, never lazily materialized
    // inside it.
    let records = generator::generate_subscription_data(history_days);
    tracing::info!(
        days = history_days,
        records = records.len(),
        "synthetic subscription history generated"
    );

    let state = AppState::new(records);
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Subscope backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
