use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use roomcraft_core::generation::DesignGenerator;
use roomcraft_db::{PgStore, Store};
use roomcraft_gemini::GeminiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomcraft_api::config::{GeminiSettings, ServerConfig};
use roomcraft_api::router::build_app_router;
use roomcraft_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomcraft_api=debug,roomcraft_gemini=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        serve_frontend = config.serve_frontend,
        "Loaded server configuration"
    );

    // --- Storage (optional) ---
    let store = connect_store(&config.database_url).await;

    // --- Generation service (optional) ---
    let generator = build_generator(&config.gemini);

    // --- App state ---
    let addr = SocketAddr::new(config.host, config.port);
    let state = AppState {
        config: Arc::new(config),
        generator,
        store,
    };

    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    tracing::info!("Health check: http://localhost:{}/api/health", addr.port());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Connect to PostgreSQL and apply migrations.
///
/// Any failure puts the process in degraded mode: requests are still served,
/// but nothing is persisted.
async fn connect_store(database_url: &str) -> Option<Arc<dyn Store>> {
    let pool = match roomcraft_db::create_pool(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "Database connection failed, continuing without persistence");
            return None;
        }
    };
    tracing::info!("Database connection pool created");

    if let Err(e) = roomcraft_db::run_migrations(&pool).await {
        tracing::warn!(error = %e, "Database migrations failed, continuing without persistence");
        return None;
    }
    tracing::info!("Database migrations applied");

    Some(Arc::new(PgStore::new(pool)))
}

fn build_generator(settings: &GeminiSettings) -> Option<Arc<dyn DesignGenerator>> {
    let Some(api_key) = settings.api_key.clone() else {
        tracing::error!("Gemini API key is missing. Please set GEMINI_API_KEY environment variable.");
        return None;
    };

    let client = GeminiClient::new(api_key, settings.model.clone(), settings.api_base.clone());
    tracing::info!(model = client.model(), "Gemini client configured");
    Some(Arc::new(client))
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
