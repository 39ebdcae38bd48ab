// src/main.rs
use anyhow::Result;
use blog_core::application::{
    ports::{time::Clock, unit_of_work::UnitOfWorkFactory},
    services::ApplicationServices,
};
use blog_core::config::AppConfig;
use blog_core::infrastructure::{
    database,
    time::SystemClock,
    unit_of_work::{PostgresUnitOfWorkFactory, SqliteUnitOfWorkFactory},
};
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads `.env` too, so RUST_LOG from the file reaches the subscriber.
    let config = AppConfig::from_env()?;
    init_tracing();
    let uow_factory = connect(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = Arc::new(ApplicationServices::new(uow_factory, clock));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Open the pool for the configured backend, migrate it and wrap it in a
/// unit-of-work factory.
async fn connect(config: &AppConfig) -> Result<Arc<dyn UnitOfWorkFactory>> {
    let url = config.database_url();
    let max_connections = config.max_connections();

    if config.is_sqlite() {
        let pool = database::init_sqlite_pool(url, max_connections).await?;
        database::run_sqlite_migrations(&pool).await?;
        tracing::info!(backend = "sqlite", "database ready");
        Ok(Arc::new(SqliteUnitOfWorkFactory::new(pool)))
    } else {
        let pool = database::init_postgres_pool(url, max_connections).await?;
        database::run_postgres_migrations(&pool).await?;
        tracing::info!(backend = "postgres", "database ready");
        Ok(Arc::new(PostgresUnitOfWorkFactory::new(pool)))
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
