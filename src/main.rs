// src/main.rs

use dotenvy::dotenv;
use eduportal::config::Config;
use eduportal::pathways::Pathways;
use eduportal::routes;
use eduportal::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let pathways = load_pathways(&config).await?;
    tracing::info!(
        "Loaded {} careers and {} subjects",
        pathways.careers.len(),
        pathways.subjects.len()
    );

    let state = AppState {
        config: config.clone(),
        pathways: Arc::new(pathways),
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

async fn load_pathways(config: &Config) -> Result<Pathways, Box<dyn std::error::Error>> {
    match &config.pathways_file {
        Some(path) => {
            tracing::info!("Loading pathway tables from {}", path);
            let raw = tokio::fs::read_to_string(path).await?;
            Ok(Pathways::from_json(&raw)?)
        }
        None => Ok(Pathways::embedded()?),
    }
}
