//! Roombook HTTP server binary.
//!
//! Connects to PostgreSQL, applies migrations and serves the booking API.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use roombook_api::AppState;
use roombook_api::config::ApiConfig;
use roombook_core::auth::credentials::StaticCredentials;
use roombook_core::auth::jwt::SigningSecret;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "roombook_server", about = "Meeting room booking API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/roombook"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roombook_api=debug,roombook_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    info!(
        bind = %args.bind,
        max_connections = args.max_connections,
        "starting roombook_server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    roombook_api::migrate(&pool).await?;

    let config = ApiConfig {
        bind_addr: args.bind,
        jwt_secret: SigningSecret::resolve(),
    };

    let credentials = StaticCredentials::from_env()?;
    info!(username = credentials.username(), "login account configured");

    let state = AppState::postgres(pool, Arc::new(credentials), config.clone());
    let app = roombook_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
