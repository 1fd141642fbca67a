//! Auth module: domain inputs/outputs and the login/registration service.
//!
//! Persistence goes through `crate::store::Store`; hashing through
//! `crate::credentials::CredentialService`.

pub mod domain;
pub mod service;

pub use service::AuthService;
