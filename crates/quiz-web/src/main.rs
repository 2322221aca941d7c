//! Quiz web server entry point.

use std::sync::{Arc, Mutex};

use quiz_catalog::application::seed::seed_default_quizzes;
use quiz_core::clock::SystemClock;
use quiz_core::rng::SystemRng;
use quiz_store::PgQuizRepository;
use quiz_web::config::Config;
use quiz_web::error::AppError;
use quiz_web::routes;
use quiz_web::session::SessionStore;
use quiz_web::state::AppState;
use quiz_web::telemetry;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber.
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting quiz web server");

    // Create database connection pool and bring the schema up to date.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    // Build application state.
    let rng = match config.random_seed {
        Some(seed) => {
            tracing::info!(seed, "Using fixed random seed");
            SystemRng::seeded(seed)
        }
        None => SystemRng::from_os(),
    };
    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(Mutex::new(rng)),
        Arc::new(PgQuizRepository::new(pool)),
        SessionStore::new(config.session_ttl),
    );

    if config.seed_quizzes {
        let added =
            seed_default_quizzes(app_state.clock.as_ref(), &*app_state.quiz_repository).await?;
        tracing::info!(added, "Seed step complete");
    }

    // Build router.
    let app = routes::app(app_state).layer(TraceLayer::new_for_http());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    telemetry.shutdown();
    Ok(())
}
