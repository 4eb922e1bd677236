// src/application/forms/auth.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FormResult, FormState, SubmitGuard, Submitted};
use crate::application::{
    commands::auth::{AuthCommandService, MIN_PASSWORD_LENGTH, SignInCommand, SignUpCommand},
    dto::{FeedbackKind, FormFeedback, SessionDto},
    error::ApplicationError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

pub struct AuthForm {
    commands: Arc<AuthCommandService>,
    mode: AuthMode,
    email: String,
    password: String,
    confirm_password: String,
    state: FormState,
}

impl AuthForm {
    pub fn new(commands: Arc<AuthCommandService>) -> Self {
        Self {
            commands,
            mode: AuthMode::SignIn,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            state: FormState::Idle,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    pub async fn submit(&mut self) -> FormResult<SessionDto> {
        let _guard = SubmitGuard::begin(&mut self.state);

        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormFeedback::new(
                FeedbackKind::Invalid,
                "Error",
                "Email and password are required",
            ));
        }

        if self.mode == AuthMode::SignUp {
            if self.password != self.confirm_password {
                return Err(FormFeedback::new(
                    FeedbackKind::Invalid,
                    "Error",
                    "Passwords don't match",
                ));
            }
            if self.password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(FormFeedback::new(
                    FeedbackKind::Invalid,
                    "Error",
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
                ));
            }
        }

        let email = self.email.clone();
        let password = self.password.clone();
        let result = match self.mode {
            AuthMode::SignIn => self.commands.sign_in(SignInCommand { email, password }).await,
            AuthMode::SignUp => self.commands.sign_up(SignUpCommand { email, password }).await,
        };

        match result {
            Ok(session) => {
                self.password.clear();
                self.confirm_password.clear();
                let description = match self.mode {
                    AuthMode::SignIn => "Signed in successfully",
                    AuthMode::SignUp => "Account created successfully",
                };
                Ok(Submitted {
                    value: session,
                    feedback: FormFeedback::success("Success!", description),
                })
            }
            Err(err) => {
                let kind = match &err {
                    ApplicationError::Unauthorized(_) => FeedbackKind::Unauthorized,
                    e if e.is_conflict() => FeedbackKind::Conflict,
                    e if e.is_validation() => FeedbackKind::Invalid,
                    _ => FeedbackKind::Failed,
                };
                if kind == FeedbackKind::Failed {
                    tracing::error!(error = %err, "authentication failed unexpectedly");
                    return Err(FormFeedback::new(
                        kind,
                        "Error",
                        "An unexpected error occurred",
                    ));
                }
                Err(FormFeedback::new(
                    kind,
                    "Authentication Error",
                    err.user_message(),
                ))
            }
        }
    }
}
