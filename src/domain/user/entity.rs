// src/domain/user/entity.rs
use crate::domain::email::EmailAddress;
use crate::domain::user::value_objects::{PasswordHash, UserId};
use chrono::{DateTime, Utc};

/// Account known to the local authentication collaborator.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
}
