use super::AuthCommandService;
use crate::application::{error::ApplicationResult, session::SessionContext};

impl AuthCommandService {
    /// Revoke the session behind `session` and clear it.
    pub async fn sign_out(&self, session: &mut SessionContext) -> ApplicationResult<()> {
        if let Some(token) = session.token() {
            self.session_store.revoke(token).await?;
        }
        if let Some(user) = session.user() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        session.clear();
        Ok(())
    }
}
