use std::sync::Arc;

use pto_planner::api::{AppState, create_router};
use pto_planner::config::{HolidayLoader, Settings};
use pto_planner::planner::Planner;
use pto_planner::store::{JsonFileStore, MemoryStore, ProfileStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pto_planner=debug,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(holidays_dir = %settings.holidays_dir.display(), "Settings loaded");

    let calendar = HolidayLoader::load(&settings.holidays_dir)?;

    let store: Arc<dyn ProfileStore> = match &settings.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "Persisting profiles as JSON files");
            Arc::new(JsonFileStore::open(dir)?)
        }
        None => {
            tracing::warn!("PTO_PLANNER_DATA_DIR not set, profiles are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let app = create_router(AppState::new(Planner::new(calendar, store)));

    let addr = settings.server_address();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
