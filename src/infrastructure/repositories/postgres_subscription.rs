use super::map_sqlx;
use crate::domain::email::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscription::{NewSubscription, Subscription, SubscriptionRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: row.id,
            email: EmailAddress::new(row.email)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    #[tracing::instrument(name = "insert subscription", skip(self, subscription))]
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<Subscription> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "INSERT INTO subscriptions (email) VALUES ($1) RETURNING id, email, created_at",
        )
        .bind(subscription.email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Subscription::try_from(row)
    }
}
