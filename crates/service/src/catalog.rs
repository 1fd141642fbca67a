//! Read-only lookups over the seeded technician and appliance-type rows.

use std::sync::Arc;

use tracing::instrument;

use crate::errors::ServiceError;
use crate::store::{Store, Technician};

/// Filter applied by the featured-technicians listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedPolicy {
    pub min_rating: f64,
    pub limit: u64,
}

impl Default for FeaturedPolicy {
    fn default() -> Self { Self { min_rating: 4.0, limit: 10 } }
}

impl From<&configs::CatalogConfig> for FeaturedPolicy {
    fn from(cfg: &configs::CatalogConfig) -> Self {
        Self { min_rating: cfg.featured_min_rating, limit: cfg.featured_limit }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn Store>,
    featured: FeaturedPolicy,
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>, featured: FeaturedPolicy) -> Self { Self { store, featured } }

    #[instrument(skip(self))]
    pub async fn locations(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.list_distinct_locations().await?)
    }

    /// A missing query behaves like an empty one and matches everything.
    #[instrument(skip(self))]
    pub async fn appliance_suggestions(&self, query: Option<&str>) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.search_appliance_types(query.unwrap_or_default()).await?)
    }

    #[instrument(skip(self))]
    pub async fn featured_technicians(&self) -> Result<Vec<Technician>, ServiceError> {
        let FeaturedPolicy { min_rating, limit } = self.featured;
        Ok(self.store.list_featured_technicians(min_rating, limit).await?)
    }
}
