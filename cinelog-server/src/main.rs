//! cinelog server binary: a small REST API over a media catalog held
//! in a single JSON document.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelog_server::{AppState, Config, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    config.ensure_storage()?;

    info!(
        data_file = %config.data_file.display(),
        image_dir = %config.image_dir.display(),
        dev_mode = config.dev_mode,
        "configuration loaded"
    );

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let state = AppState::from_config(config);
    state.catalog.store().ensure_exists().await?;

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "cinelog server listening");

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
