use anyhow::Result;
use catalog_core::application::services::ApplicationServices;
use catalog_core::config::{AppConfig, StorageBackend};
use catalog_core::domain::{category::CategoryRepository, product::ProductRepository};
use catalog_core::infrastructure::{
    database,
    repositories::{
        InMemoryCategoryRepository, InMemoryProductRepository, SqliteCategoryRepository,
        SqliteProductRepository,
    },
};
use catalog_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tokio_util::sync::CancellationToken;
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
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let (category_repo, product_repo) = build_repositories(&config).await?;

    let services = Arc::new(ApplicationServices::new(category_repo, product_repo));
    let shutdown = CancellationToken::new();

    let state = HttpState {
        services: Arc::clone(&services),
        shutdown: shutdown.clone(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn CategoryRepository>, Arc<dyn ProductRepository>)> {
    match config.storage() {
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage");
            let categories = Arc::new(InMemoryCategoryRepository::new());
            let products: Arc<dyn ProductRepository> =
                Arc::new(InMemoryProductRepository::new(Arc::clone(&categories)));
            let categories: Arc<dyn CategoryRepository> = categories;
            Ok((categories, products))
        }
        StorageBackend::Sqlite => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            tracing::info!(database_url = config.database_url(), "using sqlite storage");
            let categories: Arc<dyn CategoryRepository> =
                Arc::new(SqliteCategoryRepository::new(pool.clone()));
            let products: Arc<dyn ProductRepository> = Arc::new(SqliteProductRepository::new(pool));
            Ok((categories, products))
        }
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

async fn shutdown_signal(shutdown: CancellationToken) {
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
    shutdown.cancel();
}
