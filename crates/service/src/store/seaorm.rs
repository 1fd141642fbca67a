use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::debug;

use models::{appliance_type, technician, user};

use super::{Store, StoreError, Technician, UserRecord};

/// `Store` backed by a sea-orm connection. Every filter is built with the
/// query builder, so values travel as bound parameters.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn insert_technician(&self, new: technician::NewTechnician) -> Result<i32, StoreError> {
        let created = technician::create(&self.db, new).await?;
        Ok(created.technician_id)
    }

    pub async fn technician_count(&self) -> Result<u64, StoreError> {
        Ok(technician::Entity::find().count(&self.db).await?)
    }

    pub async fn insert_appliance_type(&self, type_name: &str) -> Result<i32, StoreError> {
        let created = appliance_type::create(&self.db, type_name).await?;
        Ok(created.type_id)
    }
}

#[async_trait::async_trait]
impl Store for SeaOrmStore {
    async fn list_distinct_locations(&self) -> Result<Vec<String>, StoreError> {
        let locations = technician::Entity::find()
            .select_only()
            .column(technician::Column::Location)
            .distinct()
            .order_by_asc(technician::Column::Location)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(locations)
    }

    async fn search_appliance_types(&self, substring: &str) -> Result<Vec<String>, StoreError> {
        let mut query = appliance_type::Entity::find()
            .select_only()
            .column(appliance_type::Column::TypeName);
        if !substring.is_empty() {
            // instr() is case-sensitive and has no wildcard characters, unlike LIKE
            query = query.filter(Expr::cust_with_values("instr(type_name, ?) > 0", [substring]));
        }
        let names = query
            .order_by_asc(appliance_type::Column::TypeId)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        debug!(matches = names.len(), "appliance type search");
        Ok(names)
    }

    async fn list_featured_technicians(&self, min_rating: f64, limit: u64) -> Result<Vec<Technician>, StoreError> {
        let rows = technician::Entity::find()
            .filter(technician::Column::Rating.gte(min_rating))
            .order_by_asc(technician::Column::TechnicianId)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Technician::from).collect())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        // emails are not unique; the earliest row wins
        let res = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .order_by_asc(user::Column::UserId)
            .one(&self.db)
            .await?;
        Ok(res.map(UserRecord::from))
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<i32, StoreError> {
        let created = user::create(&self.db, email, password_hash).await?;
        Ok(created.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{empty_store, seeded_store};

    #[tokio::test]
    async fn distinct_locations_from_seed() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;
        let locations = store.list_distinct_locations().await?;
        assert_eq!(locations, vec!["Chicago", "Los Angeles", "New York"]);
        Ok(())
    }

    #[tokio::test]
    async fn distinct_locations_removes_duplicates_and_handles_empty() -> anyhow::Result<()> {
        let store = empty_store().await?;
        assert!(store.list_distinct_locations().await?.is_empty());

        for name in ["A", "B"] {
            store
                .insert_technician(technician::NewTechnician {
                    name: name.into(),
                    photo: String::new(),
                    specialization: "Any".into(),
                    rating: 3.0,
                    description: String::new(),
                    location: "Denver".into(),
                })
                .await?;
        }
        assert_eq!(store.list_distinct_locations().await?, vec!["Denver"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_search_returns_every_seeded_type() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;
        let all = store.search_appliance_types("").await?;
        assert_eq!(all, vec!["Refrigerator", "Washing Machine", "Microwave", "Dishwasher", "Air Conditioner"]);
        Ok(())
    }

    #[tokio::test]
    async fn search_is_case_sensitive_substring() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;
        assert_eq!(store.search_appliance_types("Microwave").await?, vec!["Microwave"]);
        assert_eq!(store.search_appliance_types("wash").await?, vec!["Dishwasher"]);
        assert_eq!(store.search_appliance_types("Wash").await?, vec!["Washing Machine"]);
        assert!(store.search_appliance_types("microwave").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn search_input_is_bound_not_interpolated() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;
        assert!(store.search_appliance_types("%").await?.is_empty());
        assert!(store.search_appliance_types("_").await?.is_empty());
        assert!(store.search_appliance_types("' OR 1=1 --").await?.is_empty());
        // the table survives a hostile search term
        assert_eq!(store.search_appliance_types("'); DROP TABLE appliance_types; --").await?.len(), 0);
        assert_eq!(store.search_appliance_types("").await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn featured_filters_by_rating_in_insertion_order() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;

        let all = store.list_featured_technicians(4.0, 10).await?;
        let names: Vec<_> = all.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith", "Charlie Brown"]);

        let top = store.list_featured_technicians(4.6, 10).await?;
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Bob Smith");
        assert_eq!(top[0].rating, 4.8);
        Ok(())
    }

    #[tokio::test]
    async fn featured_truncates_to_limit() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;
        let two = store.list_featured_technicians(0.0, 2).await?;
        let names: Vec<_> = two.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith"]);
        assert!(store.list_featured_technicians(5.0, 10).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_user_exact_match_only() -> anyhow::Result<()> {
        let (store, _) = seeded_store().await?;
        let john = store.find_user_by_email("john.doe@example.com").await?.expect("seeded user");
        assert_eq!(john.email, "john.doe@example.com");
        assert!(john.password_hash.starts_with("$argon2id$"));

        assert!(store.find_user_by_email("JOHN.DOE@example.com").await?.is_none());
        assert!(store.find_user_by_email("john.doe@example").await?.is_none());
        assert!(store.find_user_by_email("' OR '1'='1").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn insert_user_assigns_fresh_ids() -> anyhow::Result<()> {
        let store = empty_store().await?;
        let first = store.insert_user("dup@example.com", "$argon2id$first").await?;
        let second = store.insert_user("dup@example.com", "$argon2id$second").await?;
        assert!(second > first);

        let found = store.find_user_by_email("dup@example.com").await?.expect("inserted");
        assert_eq!(found.id, first);
        Ok(())
    }

    #[tokio::test]
    async fn insert_user_rejects_empty_hash() -> anyhow::Result<()> {
        let store = empty_store().await?;
        let err = store.insert_user("x@example.com", "").await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert!(store.find_user_by_email("x@example.com").await?.is_none());
        Ok(())
    }
}
