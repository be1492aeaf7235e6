use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use travel_buddy::{AppState, TravelBuddyConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TravelBuddyConfig::load()?;
    let state = Arc::new(AppState::new(config)?);

    web::run(state).await
}
