use super::map_sqlx;
use crate::domain::contact::{ContactMessage, ContactMessageRepository, NewContactMessage};
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactMessageRow {
    id: Uuid,
    name: String,
    email: String,
    contact_number: Option<String>,
    message: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: ContactMessageRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: row.id,
            name: row.name,
            email: EmailAddress::new(row.email)?,
            contact_number: row.contact_number,
            message: row.message,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    #[tracing::instrument(name = "insert contact message", skip(self, message))]
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let NewContactMessage {
            name,
            email,
            contact_number,
            message,
        } = message;

        let row = sqlx::query_as::<_, ContactMessageRow>(
            "INSERT INTO contact_messages (name, email, contact_number, message)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, contact_number, message, created_at",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(contact_number)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }
}
