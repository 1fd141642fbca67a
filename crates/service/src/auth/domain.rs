use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Fixed success marker returned on login. It authenticates nothing and must
/// not be accepted anywhere as a credential.
pub const PLACEHOLDER_TOKEN: &str = "dummy-token";

pub const MISSING_FIELDS: &str = "Email and password are required";

/// Login / registration body. Both fields are optional at the wire level so a
/// missing field becomes a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsInput {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub type LoginInput = CredentialsInput;
pub type RegisterInput = CredentialsInput;

impl CredentialsInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: Some(email.into()), password: Some(password.into()) }
    }

    /// Both fields present and non-empty, or `Validation`.
    pub fn require(self) -> Result<(String, String), ServiceError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => Ok((email, password)),
            _ => Err(ServiceError::Validation(MISSING_FIELDS.into())),
        }
    }
}

/// Login result (session)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSession {
    pub user_id: i32,
    pub email: String,
    pub token: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accepts_both_fields() {
        let (email, password) = CredentialsInput::new("a@b.c", "pw").require().unwrap();
        assert_eq!(email, "a@b.c");
        assert_eq!(password, "pw");
    }

    #[test]
    fn require_rejects_missing_or_empty() {
        let cases = [
            CredentialsInput::default(),
            CredentialsInput { email: Some("a@b.c".into()), password: None },
            CredentialsInput { email: None, password: Some("pw".into()) },
            CredentialsInput::new("", "pw"),
            CredentialsInput::new("a@b.c", ""),
        ];
        for input in cases {
            assert!(matches!(input.require(), Err(ServiceError::Validation(_))));
        }
    }

    #[test]
    fn deserializes_partial_body() {
        let input: CredentialsInput = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(input.email.as_deref(), Some("a@b.c"));
        assert!(input.password.is_none());
    }
}
