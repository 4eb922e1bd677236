// tests/support/mocks/form_repos.rs
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use uuid::Uuid;

use daily_blog::domain::contact::{ContactMessage, ContactMessageRepository, NewContactMessage};
use daily_blog::domain::errors::{DomainError, DomainResult};
use daily_blog::domain::subscription::{NewSubscription, Subscription, SubscriptionRepository};

/// Subscription table with the unique email constraint.
#[derive(Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: Mutex<Vec<Subscription>>,
    attempts: AtomicUsize,
    fail_with: Mutex<Option<String>>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert fails with a persistence error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let store = Self::default();
        *store.fail_with.lock().unwrap() = Some(message.into());
        store
    }

    pub fn count(&self) -> usize {
        self.subscriptions.lock().unwrap().len()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn emails(&self) -> Vec<String> {
        self.subscriptions
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.email.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionStore {
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<Subscription> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(DomainError::Persistence(message));
        }

        let mut subscriptions = self.subscriptions.lock().unwrap();
        if subscriptions.iter().any(|s| s.email == subscription.email) {
            return Err(DomainError::Conflict("email is already subscribed".into()));
        }
        let stored = Subscription {
            id: Uuid::new_v4(),
            email: subscription.email,
            created_at: Utc::now(),
        };
        subscriptions.push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryContactStore {
    messages: Mutex<Vec<ContactMessage>>,
    attempts: AtomicUsize,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactStore {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let stored = ContactMessage {
            id: Uuid::new_v4(),
            name: message.name,
            email: message.email,
            contact_number: message.contact_number,
            message: message.message,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}
