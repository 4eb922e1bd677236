// src/domain/contact/entity.rs
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: EmailAddress,
    pub contact_number: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub contact_number: Option<String>,
    pub message: String,
}

impl NewContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        contact_number: Option<String>,
        message: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let message = message.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if message.trim().is_empty() {
            return Err(DomainError::Validation("message cannot be empty".into()));
        }

        let contact_number = contact_number
            .map(|number| number.trim().to_string())
            .filter(|number| !number.is_empty());

        Ok(Self {
            name,
            email,
            contact_number,
            message,
        })
    }
}
