use books::catalog::memory::MemoryCatalog;
use books::catalog::store::CatalogStore;
use books::cli::args::{Cli, Commands};
use books::cli::commands::BookCli;
use books::config::Settings;
use books::server;
use books::simulation::engine::SimulationEngine;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.global.apply(Settings::from_env()?);
    tracing::debug!("Settings: {:?}", settings);

    // 1. Catalog:
    let catalog: Arc<dyn CatalogStore> =
        Arc::new(MemoryCatalog::load(settings.catalog_path.as_deref())?);

    // 2. Simulation engine:
    let mut engine = SimulationEngine::new(catalog.clone());
    if let Some(limit) = settings.max_concurrency {
        tracing::info!("Simulation concurrency limited to {} tasks", limit);
        engine = engine.with_concurrency_limit(limit.get());
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            // 3. HTTP server:
            let app = server::app(Arc::new(engine), settings.reading_duration);
            let listener = server::bind(settings.bind_addr).await?;
            tracing::info!("Press Ctrl+C to shutdown");
            server::serve(listener, app).await?;
        }
        Commands::Search { name } => {
            let cli = BookCli::new(catalog, engine, settings.reading_duration);
            cli.search(&name, &mut std::io::stdout()).await?;
        }
        Commands::Simulate { book_ids } => {
            let cli = BookCli::new(catalog, engine, settings.reading_duration);
            cli.simulate(&book_ids, &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}
