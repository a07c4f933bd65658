use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, deployment_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, wires dependencies, and starts the HTTP server.
///
/// - config/: Server, CORS and deployment settings
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and the shared-secret security scheme
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG from .env applies too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let settings = deployment_config::load_deployment_settings(&deployment_config::ProcessEnv)?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(settings);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
