use std::net::SocketAddr;
use std::sync::Arc;

use camquest_api::config::ServerConfig;
use camquest_api::router::build_app_router;
use camquest_api::state::AppState;
use camquest_db::{InventoryStore, MemStore};
use camquest_events::{EmailConfig, EmailNotifier, LogNotifier, RentalNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camquest_api=debug,camquest_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Inventory store ---
    let store: Arc<dyn InventoryStore> = if config.seed_sample_catalog {
        tracing::info!("Seeding sample camera catalog");
        Arc::new(MemStore::with_sample_catalog())
    } else {
        Arc::new(MemStore::new())
    };

    // --- Notifications ---
    let notifier = build_notifier(&config.admin_email);

    // --- App state ---
    let state = AppState {
        store,
        notifier,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// SMTP delivery when `SMTP_HOST` is set and valid, log-only otherwise.
fn build_notifier(admin_email: &str) -> Arc<dyn RentalNotifier> {
    let Some(email_config) = EmailConfig::from_env() else {
        tracing::warn!("SMTP_HOST not set, rental notifications will only be logged");
        return Arc::new(LogNotifier);
    };

    let smtp_host = email_config.smtp_host.clone();
    match EmailNotifier::new(email_config, admin_email) {
        Ok(notifier) => {
            tracing::info!(%smtp_host, %admin_email, "Email notifications enabled");
            Arc::new(notifier)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                %smtp_host,
                "Invalid email settings, rental notifications will only be logged",
            );
            Arc::new(LogNotifier)
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
