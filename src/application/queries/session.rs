// src/application/queries/session.rs
use std::sync::Arc;

use crate::application::{
    error::ApplicationResult, ports::session::SessionStore, session::SessionContext,
};

pub struct SessionQueryService {
    session_store: Arc<dyn SessionStore>,
}

impl SessionQueryService {
    pub fn new(session_store: Arc<dyn SessionStore>) -> Self {
        Self { session_store }
    }

    /// Resolve a bearer token into a session context. Unknown or expired
    /// tokens give an anonymous context.
    pub async fn current_session(&self, token: Option<&str>) -> ApplicationResult<SessionContext> {
        let Some(token) = token else {
            return Ok(SessionContext::anonymous());
        };

        Ok(match self.session_store.resolve(token).await? {
            Some(user) => SessionContext::authenticated(user, token),
            None => SessionContext::anonymous(),
        })
    }
}
