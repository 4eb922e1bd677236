// src/application/ports/session.rs
use crate::application::{
    ApplicationResult,
    dto::{CurrentUser, SessionDto},
};
use async_trait::async_trait;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a session for `user` and hand back its bearer token.
    async fn open(&self, user: CurrentUser) -> ApplicationResult<SessionDto>;

    /// Resolve a bearer token to its user while the session is alive.
    async fn resolve(&self, token: &str) -> ApplicationResult<Option<CurrentUser>>;

    /// Revoke the session behind `token`. Unknown tokens are ignored.
    async fn revoke(&self, token: &str) -> ApplicationResult<()>;
}
