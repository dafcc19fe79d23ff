use agentdeck::adapters::agent_catalog::InMemoryAgentCatalog;
use agentdeck::cli::Cli;
use agentdeck::config::Settings;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!(
        "Starting agentdeck on {}:{} (config: {})",
        settings.server.host,
        settings.server.port,
        cli.config.display()
    );

    let catalog = Arc::new(InMemoryAgentCatalog::new(settings.limits.clone()));
    let app = agentdeck::create_app(catalog);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
