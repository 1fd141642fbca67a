//! Static sample rows loaded into the store at every start.
//!
//! Insertion order is the listing order for technicians and appliance types.

use tracing::info;

use models::technician::NewTechnician;

use crate::credentials::CredentialService;
use crate::errors::ServiceError;
use crate::store::{SeaOrmStore, Store};

/// (name, photo, specialization, rating, description, location)
pub const TECHNICIANS: [(&str, &str, &str, f64, &str, &str); 3] = [
    ("Alice Johnson", "/images/alice.jpg", "Refrigerator Repair", 4.5, "Experienced in all types of refrigerator repairs.", "New York"),
    ("Bob Smith", "/images/bob.jpg", "Washing Machine Repair", 4.8, "Specialist in washing machine diagnostics and repair.", "Los Angeles"),
    ("Charlie Brown", "/images/charlie.jpg", "Microwave Repair", 4.0, "Quick and reliable microwave services.", "Chicago"),
];

pub const APPLIANCE_TYPES: [&str; 5] = ["Refrigerator", "Washing Machine", "Microwave", "Dishwasher", "Air Conditioner"];

/// Demo accounts as (email, plaintext). Only hashes reach the store.
pub const USERS: [(&str, &str); 15] = [
    ("john.doe@example.com", "Password@123"),
    ("jane.doe@example.com", "securepass"),
    ("mark.smith@example.com", "mypass123"),
    ("lisa.brown@example.com", "mypassword"),
    ("emma.johnson@example.com", "testpass"),
    ("oliver.jones@example.com", "admin123"),
    ("noah.garcia@example.com", "guestpass"),
    ("ava.martin@example.com", "passkey"),
    ("liam.moore@example.com", "password456"),
    ("sophia.taylor@example.com", "letmein123"),
    ("mason.anderson@example.com", "myp@ssword"),
    ("mia.white@example.com", "welcome123"),
    ("logan.martinez@example.com", "qwerty123"),
    ("isabella.rodriguez@example.com", "access123"),
    ("lucas.thompson@example.com", "pass1234"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub technicians: usize,
    pub appliance_types: usize,
    pub users: usize,
}

/// Insert every sample row, hashing user passwords first. A store that
/// already holds technicians is left untouched.
pub async fn seed_sample_data(store: &SeaOrmStore, credentials: &CredentialService) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();
    if store.technician_count().await? > 0 {
        info!("store already populated; skipping sample data");
        return Ok(report);
    }

    for (name, photo, specialization, rating, description, location) in TECHNICIANS {
        store
            .insert_technician(NewTechnician {
                name: name.into(),
                photo: photo.into(),
                specialization: specialization.into(),
                rating,
                description: description.into(),
                location: location.into(),
            })
            .await?;
        report.technicians += 1;
    }

    for type_name in APPLIANCE_TYPES {
        store.insert_appliance_type(type_name).await?;
        report.appliance_types += 1;
    }

    for (email, password) in USERS {
        let hash = credentials.hash_blocking(password.to_string()).await?;
        store.insert_user(email, &hash).await?;
        report.users += 1;
    }

    info!(
        technicians = report.technicians,
        appliance_types = report.appliance_types,
        users = report.users,
        "sample data seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_store;

    #[tokio::test]
    async fn every_seeded_user_verifies() -> anyhow::Result<()> {
        let (store, credentials) = seeded_store().await?;
        for (email, password) in USERS {
            let user = store.find_user_by_email(email).await?.expect("seeded");
            assert_ne!(user.password_hash, password);
            assert!(credentials.verify(password, &user.password_hash), "{email}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn seeding_twice_is_a_no_op() -> anyhow::Result<()> {
        let (store, credentials) = seeded_store().await?;
        let again = seed_sample_data(&store, &credentials).await?;
        assert_eq!(again, SeedReport::default());
        assert_eq!(store.technician_count().await?, 3);
        assert_eq!(store.search_appliance_types("").await?.len(), 5);
        Ok(())
    }

    #[test]
    fn seed_ratings_are_in_range() {
        for (.., rating, _, _) in TECHNICIANS {
            assert!((0.0..=5.0).contains(&rating));
        }
    }
}
