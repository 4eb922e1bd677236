// tests/support/mocks/mod.rs
mod article_repos;
mod form_repos;
mod security;
mod user_repo;

pub use article_repos::{FailingArticleRead, InMemoryArticleStore};
pub use form_repos::{InMemoryContactStore, InMemorySubscriptionStore};
pub use security::DummyPasswordHasher;
pub use user_repo::InMemoryUserRepo;
