use anyhow::Context;
use scoring::{RangeTable, RecentHistory};
use tokio::net::TcpListener;
use web::{AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting credit score conversion API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let ranges = RangeTable::builtin();
    ranges
        .validate()
        .context("Score range table is misconfigured")?;
    tracing::info!("Loaded score ranges for: {}", ranges.countries().join(", "));

    let history = RecentHistory::new(config.history_capacity);
    tracing::info!("Keeping the {} most recent conversions", history.capacity());

    let app = web::app(AppState::new(ranges, history));

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
