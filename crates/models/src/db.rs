use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

// An in-memory SQLite database lives exactly as long as its connection.
const KEEP_ALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Connection settings for the backing SQLite database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self { url: IN_MEMORY_URL.to_string(), sqlx_logging: false }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(cfg: &configs::DatabaseConfig) -> Self {
        Self { url: cfg.url.clone(), sqlx_logging: cfg.sqlx_logging }
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        // every extra pooled connection would open its own empty database,
        // and a recycled one would drop the data
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(KEEP_ALIVE)
            .max_lifetime(KEEP_ALIVE);
    }
    Database::connect(opt).await
}

/// Connect and create the schema.
pub async fn connect_migrated(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(in_memory = cfg.is_in_memory(), "database schema ready");
    Ok(db)
}
