// src/application/forms/subscribe.rs
use std::sync::Arc;

use super::{FormResult, FormState, SubmitGuard, Submitted};
use crate::application::{
    commands::subscriptions::{SubscribeCommand, SubscriptionCommandService},
    dto::{FeedbackKind, FormFeedback},
};
use crate::domain::email::EmailAddress;

pub struct SubscribeForm {
    commands: Arc<SubscriptionCommandService>,
    email: String,
    state: FormState,
}

impl SubscribeForm {
    pub fn new(commands: Arc<SubscriptionCommandService>) -> Self {
        Self {
            commands,
            email: String::new(),
            state: FormState::Idle,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub async fn submit(&mut self) -> FormResult<()> {
        let _guard = SubmitGuard::begin(&mut self.state);

        let email = self.email.trim().to_string();
        if EmailAddress::new(email.as_str()).is_err() {
            return Err(FormFeedback::new(
                FeedbackKind::Invalid,
                "Error",
                "Please enter a valid email address",
            ));
        }

        match self.commands.subscribe(SubscribeCommand { email }).await {
            Ok(()) => {
                self.email.clear();
                Ok(Submitted {
                    value: (),
                    feedback: FormFeedback::success(
                        "Success!",
                        "Thank you for subscribing to our newsletter!",
                    ),
                })
            }
            Err(err) if err.is_conflict() => Err(FormFeedback::new(
                FeedbackKind::Conflict,
                "Already Subscribed",
                "This email is already subscribed to our newsletter",
            )),
            Err(err) => {
                tracing::error!(error = %err, "subscription error");
                Err(FormFeedback::new(
                    FeedbackKind::Failed,
                    "Error",
                    "Failed to subscribe. Please try again.",
                ))
            }
        }
    }
}
