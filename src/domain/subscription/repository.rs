use crate::domain::errors::DomainResult;
use crate::domain::subscription::entity::{NewSubscription, Subscription};
use async_trait::async_trait;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a subscriber. An already subscribed email surfaces as
    /// `DomainError::Conflict`.
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<Subscription>;
}
