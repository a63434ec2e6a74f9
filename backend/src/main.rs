//! Backend entry-point: loads configuration, prepares storage and serves the API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use artfolio::inbound::http::health::HealthState;
use artfolio::inbound::http::session_config::{BuildMode, session_settings_from_env};
use artfolio::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use artfolio::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let mode = BuildMode::from_debug_assertions();
    let session = session_settings_from_env(&DefaultEnv::default(), mode)
        .map_err(std::io::Error::other)?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
        settings.client_url(),
    )
    .with_build_mode(mode)
    .with_status_revision(settings.status_revision())
    .with_github(settings.github())
    .with_fixture_login(settings.allow_fixture_login)
    .with_cloudinary(
        settings
            .cloudinary()
            .map_err(|e| std::io::Error::other(format!("invalid Cloudinary settings: {e}")))?,
    );

    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect_database(database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "artfolio backend listening");
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

/// Apply pending migrations, then open the connection pool.
async fn connect_database(database_url: String) -> std::io::Result<DbPool> {
    let migration_url = database_url.clone();
    let applied = web::block(move || run_pending_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");

    DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)
}
