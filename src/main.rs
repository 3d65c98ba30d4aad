use std::sync::Arc;

use cinematch_api::config::Config;
use cinematch_api::db::{create_pool, PgStore};
use cinematch_api::routes::{create_router, AppState};
use cinematch_api::services::CatalogSources;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    let store = PgStore::new(pool);
    store.migrate().await?;

    let catalogs = CatalogSources {
        bollywood: config.bollywood_csv.clone(),
        hollywood: config.hollywood_csv.clone(),
    };

    let state = AppState::new(Arc::new(store), catalogs);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
