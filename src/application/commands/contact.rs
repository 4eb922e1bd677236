// src/application/commands/contact.rs
use std::sync::Arc;

use crate::{
    application::error::ApplicationResult,
    domain::{
        contact::{ContactMessageRepository, NewContactMessage},
        email::EmailAddress,
    },
};

pub struct SendContactMessageCommand {
    pub name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub message: String,
}

pub struct ContactCommandService {
    repo: Arc<dyn ContactMessageRepository>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn send_message(&self, command: SendContactMessageCommand) -> ApplicationResult<()> {
        let email = EmailAddress::new(command.email)?;
        let message =
            NewContactMessage::new(command.name, email, command.contact_number, command.message)?;

        let stored = self.repo.insert(message).await?;
        tracing::info!(message_id = %stored.id, "contact message stored");
        Ok(())
    }
}
