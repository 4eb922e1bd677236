// src/application/commands/subscriptions.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        email::EmailAddress,
        errors::DomainError,
        subscription::{NewSubscription, SubscriptionRepository},
    },
};

pub struct SubscribeCommand {
    pub email: String,
}

pub struct SubscriptionCommandService {
    repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionCommandService {
    pub fn new(repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repo }
    }

    /// Add a newsletter subscriber. An address that is already subscribed
    /// comes back as `ApplicationError::Conflict`.
    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<()> {
        let email = EmailAddress::new(command.email)?;

        match self.repo.insert(NewSubscription { email }).await {
            Ok(subscription) => {
                tracing::info!(subscription_id = %subscription.id, "newsletter subscription added");
                Ok(())
            }
            Err(DomainError::Conflict(_)) => Err(ApplicationError::conflict(
                "email is already subscribed",
            )),
            Err(other) => Err(other.into()),
        }
    }
}
