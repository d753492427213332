use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobportal::config::{Config, SnapshotSource};
use jobportal::db;
use jobportal::routes::{self, AppState};
use jobportal::source::{FileJobSource, JobSource, PgJobSource};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received, exiting gracefully");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobportal=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    let options = config.search_options();

    let source: Arc<dyn JobSource> = match config.snapshot_source()? {
        SnapshotSource::Postgres(url) => {
            tracing::info!("Connecting to database...");
            Arc::new(PgJobSource::new(db::create_pool(&url).await?))
        }
        SnapshotSource::File(path) => {
            let source = FileJobSource::load(&path).await?;
            tracing::info!("Serving postings from {}", source.path().display());
            Arc::new(source)
        }
    };

    tracing::info!(
        "Search defaults: {} per page (max {}), negotiable salaries sort {}",
        options.per_page,
        options.max_per_page,
        options.missing_salary
    );

    let app = routes::app(AppState { source, options });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
