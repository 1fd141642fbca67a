//! Service layer for the repair hub backend.
//! - `store`: the data-access seam (`Store` trait) and its sea-orm implementation.
//! - `credentials`: Argon2id hashing and verification.
//! - `auth` / `catalog`: request-level operations used by the HTTP handlers.
//! - `seed`: static sample rows loaded at every start.

pub mod errors;
pub mod store;
pub mod credentials;
pub mod auth;
pub mod catalog;
pub mod seed;
#[cfg(test)]
pub mod test_support;
