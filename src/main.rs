use employee_service::{
    build_router,
    config::AppConfig,
    db,
    error::AppError,
    services::{seed, Database, JwtService},
    AppState,
};
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // Load configuration - fail fast if invalid
    let config = AppConfig::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        "Starting employee records service"
    );

    // Initialize database and schema
    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool)
        .await
        .map_err(anyhow::Error::new)?;

    let database = Database::new(pool);

    // Seed the admin account and sample records before serving
    seed::run(&database, &config.seed).await?;
    tracing::info!("Database seeded");

    let jwt = JwtService::new(&config.jwt);

    let state = AppState {
        config: config.clone(),
        db: database,
        jwt,
    };

    // Build application router
    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
