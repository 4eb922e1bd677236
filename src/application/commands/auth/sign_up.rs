use super::{AuthCommandService, password::validate_password};
use crate::{
    application::{
        dto::{CurrentUser, SessionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        email::EmailAddress,
        errors::DomainError,
        user::{NewUser, PasswordHash},
    },
};

pub struct SignUpCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    /// Create an account and open a session for it.
    pub async fn sign_up(&self, command: SignUpCommand) -> ApplicationResult<SessionDto> {
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            email,
            password_hash: PasswordHash::new(hashed)?,
        };

        let user = match self.user_repo.insert(new_user).await {
            Ok(user) => user,
            Err(DomainError::Conflict(_)) => {
                return Err(ApplicationError::conflict("User already registered"));
            }
            Err(other) => return Err(other.into()),
        };

        tracing::info!(user_id = %user.id, "account created");
        self.session_store.open(CurrentUser::from(&user)).await
    }
}
