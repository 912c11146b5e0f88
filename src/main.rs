use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use overtime_engine::api::{AppState, create_router};

/// HTTP server for the labor-hours allocation and overtime engine.
#[derive(Parser)]
#[command(
    name = "overtime-engine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Categorizes worked hours into regular, overtime and double-time",
    long_about = None
)]
struct Cli {
    /// Directory holding overtime.yaml and rates/*.yaml
    #[arg(long, env = "OVERTIME_CONFIG_DIR", default_value = "./config/default")]
    config_dir: PathBuf,

    /// Address to listen on
    #[arg(long, env = "OVERTIME_BIND", default_value = "127.0.0.1:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::load(&cli.config_dir).with_context(|| {
        format!("failed to load configuration from {}", cli.config_dir.display())
    })?;
    info!(config_dir = %cli.config_dir.display(), "Configuration loaded");

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!("Listening on http://{}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
