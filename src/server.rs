//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, repository wiring and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;

use crate::application::{AccountService, RewardService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgAccountRepository, PgRestaurantRepository, PgRewardRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Database migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
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
    let account_repository = Arc::new(PgAccountRepository::new(pool.clone()));
    let restaurant_repository = Arc::new(PgRestaurantRepository::new(pool.clone()));
    let reward_repository = Arc::new(PgRewardRepository::new(pool.clone()));

    let account_service = Arc::new(AccountService::new(account_repository.clone()));
    let reward_service = Arc::new(RewardService::new(
        account_repository,
        restaurant_repository,
        reward_repository,
    ));

    let state = AppState::new(account_service, reward_service);
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
