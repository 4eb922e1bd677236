pub mod articles;
pub mod auth;
pub mod contact;
pub mod subscriptions;
