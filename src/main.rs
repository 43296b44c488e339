mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::maintenance_overdue, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let mut scheduler = maintenance_overdue::start_scheduler(db.clone()).await?;

    if config.api_token.is_none() {
        tracing::warn!("API_TOKEN is not set; the API is open to any caller");
    }

    let app = router::router(
        AppState::new(db, config.api_token.clone()),
        config.frontend_url.as_deref(),
    );

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    scheduler.shutdown().await?;

    tracing::info!("Server shut down gracefully");

    Ok(())
}
