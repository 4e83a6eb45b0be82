use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fittrack::config::Config;
use fittrack::handlers::{dashboard, workouts};
use fittrack::repositories::WorkoutRepository;
use fittrack::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Opening database: {}", config.database_url);

    // The one connection is held until shutdown
    let pool = match db::create_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Cannot open the database: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = migrations::run_migrations(&pool) {
        tracing::error!("Cannot prepare the database: {:#}", e);
        std::process::exit(2);
    }

    let workout_repo = WorkoutRepository::new(pool.clone());

    let dashboard_state = dashboard::DashboardState {
        workout_repo: workout_repo.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_repo: workout_repo.clone(),
    };

    let app = routes::create_router(dashboard_state, workouts_state);

    let addr = config.server_addr();
    tracing::info!("Starting FitTrack at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
