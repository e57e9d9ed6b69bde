use anyhow::Context;
use picus_kv::app::router;
use picus_kv::config::Config;
use picus_kv::state::AppState;
use picus_kv::store::DynamoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("picus-kv starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = DynamoStore::from_config(&config).await;

    let bind_addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState::new(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
