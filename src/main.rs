use std::sync::Arc;

use tracing::info;

mod app;
mod auth;
mod config;
mod error;
mod state;
mod status;
mod store;

use crate::auth::provider::MockAuth;
use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::MongoStatusStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "pulselog=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);
    let store = MongoStatusStore::connect(&config.mongo_url, &config.db_name).await?;
    let state = AppState::from_parts(
        Arc::new(store.clone()),
        Arc::new(MockAuth),
        config,
    );

    let app = app::build_app(state);
    app::serve(app).await?;

    info!("releasing document store connection");
    store.shutdown().await;
    Ok(())
}
