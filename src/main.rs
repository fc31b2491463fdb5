use std::sync::Arc;

use hyperdash::api::router::create_router;
use hyperdash::config::{AppConfig, LogFormat};
use hyperdash::data::load_dataset;
use hyperdash::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let metrics_handle = hyperdash::metrics::init_metrics()?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        "Loading datasets..."
    );
    let dataset = match load_dataset(&config) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load datasets");
            return Err(e.into());
        }
    };

    let addr = config.bind_addr();
    let state = AppState {
        dataset,
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}
