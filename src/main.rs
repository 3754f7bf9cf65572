//! BoardHub Server — queue-board monitor behind a domain-gated sign-in.
//!
//! Main entry point: loads configuration, discovers each board's
//! queues, and starts the HTTP server with every board mounted behind
//! the auth gate.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use boardhub_api::router::build_router;
use boardhub_api::state::{AppState, BoardRuntime};
use boardhub_auth::oauth::GoogleProvider;
use boardhub_auth::session::build_session_store;
use boardhub_core::config::AppConfig;
use boardhub_core::config::logging::LoggingConfig;
use boardhub_core::error::AppError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logging comes up before the full config load so the loader's
    // warnings (defaulted secret, dropped duplicate mounts, malformed
    // numerics) reach a subscriber.
    init_logging(&LoggingConfig::from_lookup(&|key: &str| {
        std::env::var(key).ok()
    }));

    // The only fatal configuration error is missing identity-provider
    // credentials — running with a broken auth gate is worse than not
    // running.
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting BoardHub v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Loading {} board configuration(s)", config.boards.len());

    // Discovery runs sequentially so a failure is attributable to one
    // board; a bad backend mounts with zero queues rather than failing
    // startup.
    let mut boards = Vec::with_capacity(config.boards.len());
    for descriptor in &config.boards {
        let queues = boardhub_discovery::discover(descriptor).await;
        tracing::info!(
            mount_path = %descriptor.mount_path,
            queues = queues.len(),
            "Discovered queues"
        );
        boards.push(BoardRuntime {
            descriptor: descriptor.clone(),
            queues,
        });
    }

    let sessions = build_session_store(&config.session).await?;
    let provider = Arc::new(GoogleProvider::new(config.auth.clone()));

    let config = Arc::new(config);
    let state = AppState::new(Arc::clone(&config), sessions, provider, boards);
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("BoardHub listening on {addr}");
    for board in &config.boards {
        let mode = if board.access_mode.is_read_only() {
            " [read-only]"
        } else {
            ""
        };
        tracing::info!("  board: http://{addr}{}{mode}", board.mount_path);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("BoardHub shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
