use std::env;
use std::error::Error;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use workforce_metrics::api::{create_router, AppState};
use workforce_metrics::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/logistica";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("WORKFORCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        metrics = config.config().metrics().len(),
        "Configuration loaded"
    );

    let addr: SocketAddr = env::var("WORKFORCE_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Workforce metrics API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
