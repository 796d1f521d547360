//! BlogToo server binary.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use blogtoo::adapters::http::{app_router, AppState};
use blogtoo::adapters::{channels_from_config, comment_repository_from_config, FilesystemContentSource};
use blogtoo::application::NotificationDispatcher;
use blogtoo::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("Invalid configuration")?;

    let comment_repository = comment_repository_from_config(&config.storage)
        .await
        .context("Failed to open comment store")?;
    let content_source = Arc::new(FilesystemContentSource::new(&config.content.posts_dir));

    let channels = channels_from_config(&config.notifications);
    let dispatcher = Arc::new(NotificationDispatcher::from_config(&config.notifications, channels));
    tracing::info!(
        sms = config.notifications.is_sms_enabled(),
        webhook = config.notifications.is_webhook_enabled(),
        "Notification channels configured"
    );

    let state = AppState::new(
        comment_repository,
        content_source,
        dispatcher,
        config.content.posts_per_page,
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, environment = ?config.server.environment, "BlogToo listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.json_logs() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
