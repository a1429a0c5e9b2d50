// src/main.rs

use std::path::Path;
use std::sync::Arc;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use hearth::config::CONFIG;
use hearth::db;
use hearth::server::build_router;
use hearth::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = CONFIG
        .log_level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting hearth backend");
    if CONFIG.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set - AI schedule assistant disabled");
    }

    let pool = db::create_pool(&CONFIG.database_url, CONFIG.sqlite_max_connections).await?;
    db::run_migrations(&pool, Path::new(&CONFIG.migrations_dir)).await?;

    let state = Arc::new(AppState::new(
        pool,
        CONFIG.openai_api_key.clone(),
        CONFIG.openai_base_url.clone(),
    ));

    let app = build_router(state);

    let bind_address = format!("{}:{}", CONFIG.host, CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
