// src/application/forms/contact.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FormResult, FormState, REQUIRED_FIELDS_MESSAGE, SubmitGuard, Submitted, is_blank};
use crate::{
    application::{
        commands::contact::{ContactCommandService, SendContactMessageCommand},
        dto::{FeedbackKind, FormFeedback},
    },
    domain::email::EmailAddress,
};

const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub message: String,
}

/// Which required fields failed the last validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactFieldErrors {
    pub name: bool,
    pub email: bool,
    pub message: bool,
}

impl ContactFieldErrors {
    pub fn any(&self) -> bool {
        self.name || self.email || self.message
    }
}

pub struct ContactForm {
    commands: Arc<ContactCommandService>,
    fields: ContactFields,
    errors: ContactFieldErrors,
    state: FormState,
}

impl ContactForm {
    pub fn new(commands: Arc<ContactCommandService>) -> Self {
        Self {
            commands,
            fields: ContactFields::default(),
            errors: ContactFieldErrors::default(),
            state: FormState::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> ContactFieldErrors {
        self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
        self.errors.name = false;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.fields.email = email.into();
        self.errors.email = false;
    }

    pub fn set_contact_number(&mut self, contact_number: impl Into<String>) {
        self.fields.contact_number = contact_number.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.fields.message = message.into();
        self.errors.message = false;
    }

    /// Flag every blank required field and a malformed email. Returns true
    /// when nothing is flagged.
    pub fn validate(&mut self) -> bool {
        self.errors = ContactFieldErrors {
            name: is_blank(&self.fields.name),
            email: EmailAddress::new(self.fields.email.as_str()).is_err(),
            message: is_blank(&self.fields.message),
        };
        !self.errors.any()
    }

    fn validation_feedback(&self) -> FormFeedback {
        let only_malformed_email = self.errors.email
            && !is_blank(&self.fields.email)
            && !self.errors.name
            && !self.errors.message;
        let description = if only_malformed_email {
            INVALID_EMAIL_MESSAGE
        } else {
            REQUIRED_FIELDS_MESSAGE
        };
        FormFeedback::new(FeedbackKind::Invalid, "Validation Error", description)
    }

    pub async fn submit(&mut self) -> FormResult<()> {
        if !self.validate() {
            tracing::warn!(errors = ?self.errors, "contact form rejected");
            return Err(self.validation_feedback());
        }

        let command = SendContactMessageCommand {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            contact_number: Some(self.fields.contact_number.clone()),
            message: self.fields.message.clone(),
        };

        let result = {
            let _guard = SubmitGuard::begin(&mut self.state);
            self.commands.send_message(command).await
        };

        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors = ContactFieldErrors::default();
                Ok(Submitted {
                    value: (),
                    feedback: FormFeedback::success(
                        "Message Sent!",
                        "Thank you for your message. We'll get back to you soon.",
                    ),
                })
            }
            Err(err) if err.is_validation() => {
                tracing::warn!(error = %err, "contact message rejected");
                Err(FormFeedback::new(
                    FeedbackKind::Invalid,
                    "Validation Error",
                    err.user_message(),
                ))
            }
            Err(err) => {
                tracing::error!(error = %err, "error submitting contact form");
                Err(FormFeedback::new(
                    FeedbackKind::Failed,
                    "Error",
                    "Failed to send message. Please try again.",
                ))
            }
        }
    }
}
