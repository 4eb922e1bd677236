// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, CurrentUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleSlug, ArticleTitle, NewArticle},
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub read_time: Option<String>,
    pub slug: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &CurrentUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        let slug = match non_blank(command.slug) {
            Some(slug) => ArticleSlug::new(slug)?,
            None => ArticleSlug::from_title(&title)?,
        };

        let new_article = NewArticle {
            title,
            excerpt: non_blank(command.excerpt),
            content,
            slug,
            category: non_blank(command.category),
            read_time: non_blank(command.read_time),
            author_id: actor.id,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article published");
        Ok(created.into())
    }
}
