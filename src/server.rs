//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::application::services::{FeedbackService, LinkService, RedirectService};
use crate::domain::click_worker::run_click_worker;
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::{
    PgAccountRepository, PgAnalyticsRepository, PgFeedbackRepository, PgLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let account_repository = Arc::new(PgAccountRepository::new(pool.clone()));
    let analytics_repository = Arc::new(PgAnalyticsRepository::new(pool.clone()));
    let feedback_repository = Arc::new(PgFeedbackRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, analytics_repository));
    tracing::info!("Click worker started");

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.slug_min_length,
        config.base_url.clone(),
    ));
    let redirect_service = Arc::new(RedirectService::new(
        link_repository,
        Arc::new(SystemClock),
    ));
    let feedback_service = Arc::new(FeedbackService::new(feedback_repository));

    let state = AppState::new(
        link_service,
        redirect_service,
        feedback_service,
        account_repository,
        click_tx,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
