// src/application/dto/feedback.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    /// Rejected before any remote call.
    Invalid,
    /// The store refused a duplicate.
    Conflict,
    Unauthorized,
    Failed,
}

/// Title/description pair reported back to the person who submitted a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormFeedback {
    pub kind: FeedbackKind,
    pub title: String,
    pub description: String,
}

impl FormFeedback {
    pub fn new(
        kind: FeedbackKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Success, title, description)
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}
