// src/application/forms/article.rs
use std::sync::Arc;

use super::{FormResult, FormState, REQUIRED_FIELDS_MESSAGE, SubmitGuard, Submitted, is_blank};
use crate::application::{
    commands::articles::{ArticleCommandService, CreateArticleCommand},
    dto::{ArticleDto, FeedbackKind, FormFeedback},
    queries::articles::ArticleFeed,
    session::SessionContext,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub slug: String,
}

/// Admin authoring form. Publishing re-fetches the feed instead of
/// inserting the new article locally.
pub struct ArticleAuthorForm {
    commands: Arc<ArticleCommandService>,
    fields: ArticleFields,
    state: FormState,
}

impl ArticleAuthorForm {
    pub fn new(commands: Arc<ArticleCommandService>) -> Self {
        Self {
            commands,
            fields: ArticleFields::default(),
            state: FormState::Idle,
        }
    }

    pub fn fields(&self) -> &ArticleFields {
        &self.fields
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.fields.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.fields.content = content.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.fields.category = category.into();
    }

    pub fn set_read_time(&mut self, read_time: impl Into<String>) {
        self.fields.read_time = read_time.into();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.fields.slug = slug.into();
    }

    pub fn reset(&mut self) {
        self.fields = ArticleFields::default();
    }

    pub async fn submit(
        &mut self,
        session: &SessionContext,
        feed: &mut ArticleFeed,
    ) -> FormResult<ArticleDto> {
        let _guard = SubmitGuard::begin(&mut self.state);

        if is_blank(&self.fields.title) || is_blank(&self.fields.content) {
            return Err(FormFeedback::new(
                FeedbackKind::Invalid,
                "Validation Error",
                REQUIRED_FIELDS_MESSAGE,
            ));
        }

        let Some(author) = session.user() else {
            return Err(FormFeedback::new(
                FeedbackKind::Unauthorized,
                "Error",
                "You must be signed in to publish articles",
            ));
        };

        let fields = &self.fields;
        let command = CreateArticleCommand {
            title: fields.title.clone(),
            content: fields.content.clone(),
            excerpt: None,
            category: Some(fields.category.clone()),
            read_time: Some(fields.read_time.clone()),
            slug: Some(fields.slug.clone()),
        };

        match self.commands.create_article(author, command).await {
            Ok(article) => {
                self.fields = ArticleFields::default();
                feed.load().await;
                Ok(Submitted {
                    value: article,
                    feedback: FormFeedback::success("Success!", "Article published successfully"),
                })
            }
            Err(err) => {
                tracing::error!(error = %err, "error publishing article");
                let kind = if err.is_conflict() {
                    FeedbackKind::Conflict
                } else if err.is_validation() {
                    FeedbackKind::Invalid
                } else {
                    FeedbackKind::Failed
                };
                let message = err.user_message();
                let description = if message.is_empty() {
                    "Failed to publish article"
                } else {
                    message
                };
                Err(FormFeedback::new(kind, "Error", description))
            }
        }
    }
}
