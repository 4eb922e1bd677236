// tests/support/mocks/security.rs
use async_trait::async_trait;
use daily_blog::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// Reversible "hash" so tests do not pay for argon2.
#[derive(Clone, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
