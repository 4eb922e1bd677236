use std::sync::Arc;

use crate::application::ports::{security::PasswordHasher, session::SessionStore};
use crate::domain::user::UserRepository;

/// Local stand-in for the hosted auth provider: accounts live in the
/// `users` table, sessions in a [`SessionStore`].
pub struct AuthCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_store: Arc<dyn SessionStore>,
}

impl AuthCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_store,
        }
    }
}
