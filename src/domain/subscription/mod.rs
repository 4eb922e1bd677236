pub mod entity;
pub mod repository;

pub use entity::{NewSubscription, Subscription};
pub use repository::SubscriptionRepository;
