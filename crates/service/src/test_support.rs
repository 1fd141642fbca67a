#![cfg(test)]
use models::db::{connect_migrated, DatabaseConfig};

use crate::credentials::{CredentialConfig, CredentialService};
use crate::seed::{seed_sample_data, SeedReport};
use crate::store::SeaOrmStore;

/// Cheapest argon2 parameters, so seeding fifteen users stays fast.
pub fn low_cost_credentials() -> CredentialService {
    CredentialService::new(CredentialConfig { memory_kib: 8, iterations: 1, parallelism: 1 })
        .expect("low-cost argon2 params")
}

/// Fresh in-memory database with the schema but no rows.
pub async fn empty_store() -> Result<SeaOrmStore, anyhow::Error> {
    let db = connect_migrated(&DatabaseConfig::in_memory()).await?;
    Ok(SeaOrmStore::new(db))
}

/// Fresh in-memory database holding the sample rows.
pub async fn seeded_store() -> Result<(SeaOrmStore, CredentialService), anyhow::Error> {
    let store = empty_store().await?;
    let credentials = low_cost_credentials();
    let report = seed_sample_data(&store, &credentials).await?;
    assert_eq!(report, SeedReport { technicians: 3, appliance_types: 5, users: 15 });
    Ok((store, credentials))
}
