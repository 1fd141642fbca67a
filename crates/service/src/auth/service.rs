use std::sync::Arc;

use tracing::{info, debug, instrument};

use super::domain::{AuthSession, LoginInput, RegisterInput, PLACEHOLDER_TOKEN};
use crate::credentials::CredentialService;
use crate::errors::ServiceError;
use crate::store::Store;

/// Login and registration, independent of the web framework.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    credentials: CredentialService,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, credentials: CredentialService) -> Self { Self { store, credentials } }

    /// Register a new user with a hashed password. No duplicate-email or
    /// password-strength policy is applied.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, domain::CredentialsInput};
    /// use service::credentials::{CredentialConfig, CredentialService};
    /// use service::store::SeaOrmStore;
    /// use models::db::{connect_migrated, DatabaseConfig};
    ///
    /// tokio_test::block_on(async {
    ///     let db = connect_migrated(&DatabaseConfig::in_memory()).await.unwrap();
    ///     let creds = CredentialService::new(CredentialConfig { memory_kib: 8, iterations: 1, parallelism: 1 }).unwrap();
    ///     let svc = AuthService::new(Arc::new(SeaOrmStore::new(db)), creds);
    ///     let id = svc.register(CredentialsInput::new("user@example.com", "Secret123")).await.unwrap();
    ///     assert!(id > 0);
    /// });
    /// ```
    #[instrument(skip(self, input))]
    pub async fn register(&self, input: RegisterInput) -> Result<i32, ServiceError> {
        let (email, password) = input.require()?;
        let hash = self.credentials.hash_blocking(password).await?;
        let user_id = self.store.insert_user(&email, &hash).await?;
        info!(user_id, email = %email, "user_registered");
        Ok(user_id)
    }

    /// Check a login attempt. Unknown email and wrong password both come back
    /// as `Unauthorized`, after the same amount of hashing work.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, domain::CredentialsInput};
    /// use service::credentials::{CredentialConfig, CredentialService};
    /// use service::store::SeaOrmStore;
    /// use models::db::{connect_migrated, DatabaseConfig};
    ///
    /// tokio_test::block_on(async {
    ///     let db = connect_migrated(&DatabaseConfig::in_memory()).await.unwrap();
    ///     let creds = CredentialService::new(CredentialConfig { memory_kib: 8, iterations: 1, parallelism: 1 }).unwrap();
    ///     let svc = AuthService::new(Arc::new(SeaOrmStore::new(db)), creds);
    ///     svc.register(CredentialsInput::new("u@e.com", "Passw0rd")).await.unwrap();
    ///     let session = svc.login(CredentialsInput::new("u@e.com", "Passw0rd")).await.unwrap();
    ///     assert_eq!(session.email, "u@e.com");
    ///     assert_eq!(session.token, "dummy-token");
    /// });
    /// ```
    #[instrument(skip(self, input))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, ServiceError> {
        let (email, password) = input.require()?;
        let user = self.store.find_user_by_email(&email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified = self.credentials.verify_blocking(password, stored_hash).await?;

        match user {
            Some(user) if verified => {
                info!(user_id = user.id, "user_logged_in");
                Ok(AuthSession { user_id: user.id, email: user.email, token: PLACEHOLDER_TOKEN })
            }
            _ => {
                debug!("login rejected");
                Err(ServiceError::Unauthorized)
            }
        }
    }
}
