//! Password hashing and verification (Argon2id, PHC string format).
//!
//! Hashing is CPU-bound. Request paths use the `*_blocking`
//! wrappers, which move the work onto tokio's blocking pool.

use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, PasswordHash, Version,
};
use rand::rngs::OsRng;
use tracing::warn;

use crate::errors::ServiceError;

// hashed once per service so unknown-email logins pay the same verify cost
const ABSENT_USER_SECRET: &str = "absent-user-placeholder-secret";

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl From<&configs::CredentialsConfig> for CredentialConfig {
    fn from(cfg: &configs::CredentialsConfig) -> Self {
        Self { memory_kib: cfg.memory_kib, iterations: cfg.iterations, parallelism: cfg.parallelism }
    }
}

#[derive(Clone)]
pub struct CredentialService {
    params: Params,
    absent_hash: Arc<str>,
}

impl std::fmt::Debug for CredentialService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialService")
            .field("m_cost", &self.params.m_cost())
            .field("t_cost", &self.params.t_cost())
            .field("p_cost", &self.params.p_cost())
            .finish()
    }
}

impl CredentialService {
    pub fn new(cfg: CredentialConfig) -> Result<Self, ServiceError> {
        let params = Params::new(cfg.memory_kib, cfg.iterations, cfg.parallelism, None)
            .map_err(|e| ServiceError::Internal(format!("invalid argon2 parameters: {e}")))?;
        let absent_hash = hash_with(&params, ABSENT_USER_SECRET)?;
        Ok(Self { params, absent_hash: Arc::from(absent_hash) })
    }

    /// Salted one-way digest of `plaintext`. Two calls on the same input
    /// return different strings. An empty plaintext is hashed like any other;
    /// rejecting it is the caller's job.
    pub fn hash(&self, plaintext: &str) -> Result<String, ServiceError> {
        hash_with(&self.params, plaintext)
    }

    /// True iff `plaintext` matches `stored_hash`. The cost parameters come
    /// from the stored hash itself, and the digest comparison is constant-time.
    /// An unparsable hash never matches.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "stored password hash is malformed");
                return false;
            }
        };
        Argon2::default().verify_password(plaintext.as_bytes(), &parsed).is_ok()
    }

    /// Spend one verification on a throwaway hash and report no match.
    pub fn verify_absent(&self, plaintext: &str) -> bool {
        let _ = self.verify(plaintext, &self.absent_hash);
        false
    }

    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, ServiceError> {
        let svc = self.clone();
        tokio::task::spawn_blocking(move || svc.hash(&plaintext))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
    }

    /// Verify on the blocking pool. `None` stands for "no such user" and is
    /// checked against the throwaway hash.
    pub async fn verify_blocking(&self, plaintext: String, stored_hash: Option<String>) -> Result<bool, ServiceError> {
        let svc = self.clone();
        tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => svc.verify(&plaintext, &hash),
            None => svc.verify_absent(&plaintext),
        })
        .await
        .map_err(|e| ServiceError::Internal(format!("verification task failed: {e}")))
    }
}

fn hash_with(params: &Params, plaintext: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Internal(format!("hashing failed: {e}")))
}
