use super::AuthCommandService;
use crate::{
    application::{
        dto::{CurrentUser, SessionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::email::EmailAddress,
};

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    pub async fn sign_in(&self, command: SignInCommand) -> ApplicationResult<SessionDto> {
        let email = EmailAddress::new(command.email)
            .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        self.session_store.open(CurrentUser::from(&user)).await
    }
}
