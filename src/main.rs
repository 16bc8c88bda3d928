//! AgentPulse: metrics snapshot endpoint for the agent fleet dashboard.
//! Used by: binary entrypoint.

pub mod clock;
pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod snapshot;
pub mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env()?;
    let state = state::build_state();

    console::print_banner();
    console::print_startup(config.bind_addr);
    tracing::info!("starting agentpulse on {}", config.bind_addr);

    server::run(state, config.bind_addr).await?;
    Ok(())
}
