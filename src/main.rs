mod config;
mod error;
mod mailer;
mod models;
mod reminder;
mod repo;
mod rest;
mod scheduler;

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::mailer::SmtpMailer;
use crate::reminder::ReminderService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "interview_reminder=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("improperly configured");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to DB");

    let mailer = SmtpMailer::new(&config.smtp).expect("Failed to build SMTP transport");
    let service = Arc::new(ReminderService::new(pool, Arc::new(mailer)));

    // Armed once at startup; the handle must stay alive for the scheduler
    // to keep firing. No shutdown hook for the trigger itself.
    let _scheduler = scheduler::start(service)
        .await
        .expect("Failed to start reminder scheduler");

    let app = rest::router();
    let addr = "0.0.0.0:3000";
    tracing::info!("REST API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
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
