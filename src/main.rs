//! Gestor de Tareas HTTP server.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: `postgres://…`, `sqlite://path`, a file path or `memory`
//!   (default: `SQLite` at `gestor_tareas.sqlite`)
//! - `HOST`: listening address (default: `0.0.0.0`)
//! - `PORT`: listening port (default: `5000`)
//! - `DB_POOL_SIZE`: maximum pooled connections (default: `10`)
//! - `DB_CONNECT_TIMEOUT_SECS`: connection checkout timeout (default: `5`)
//! - `RUST_LOG`: log filter (default: `gestor_tareas=info,tower_http=info`)

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use tokio::net::TcpListener;
use tokio::signal;

use gestor_tareas::config::ServerArgs;
use gestor_tareas::http::{AppState, router};
use gestor_tareas::task::adapters::factory::TaskRepositoryFactory;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let args = ServerArgs::parse();

    if let Err(error) = gestor_tareas::telemetry::init() {
        tracing::warn!(%error, "logging was already initialised");
    }
    if let Err(error) = dotenv
        && !error.not_found()
    {
        tracing::warn!(%error, "failed to load .env file");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: ServerArgs) -> Result<(), BoxError> {
    let factory = TaskRepositoryFactory::new(args.storage_config()?);
    let repository = tokio::task::spawn_blocking(move || factory.create()).await??;
    let state = AppState::new(repository, Arc::new(DefaultClock));

    let listener = TcpListener::bind(args.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
