use anyhow::Result;
use workforce::config::{AppConfig, LoggingConfig, StorageBackend};
use workforce::server::ServerBuilder;
use workforce::storage::InMemoryStore;

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(feature = "postgres")]
async fn postgres_builder(config: &AppConfig) -> Result<ServerBuilder> {
    use workforce::storage::PostgresStore;

    let url = config
        .storage
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres backend"))?;
    let store = PostgresStore::connect(url, config.storage.max_connections).await?;
    store.migrate().await?;
    tracing::info!("Connected to PostgreSQL");
    Ok(ServerBuilder::new().with_store(store))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_builder(_config: &AppConfig) -> Result<ServerBuilder> {
    anyhow::bail!("this binary was built without the `postgres` feature")
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!(backend = ?config.storage.backend, "Starting workforce");

    let builder = match config.storage.backend {
        StorageBackend::Memory => ServerBuilder::new().with_store(InMemoryStore::new()),
        StorageBackend::Postgres => postgres_builder(&config).await?,
    };

    builder.serve(&config.server.address()).await
}
