use crate::domain::email::EmailAddress;
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account. A duplicate email surfaces as `DomainError::Conflict`.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;
}
