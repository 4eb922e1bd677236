// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub slug: ArticleSlug,
    pub category: Option<String>,
    pub read_time: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author_id: Option<UserId>,
}

/// Insert payload. The store assigns `id` and `published_at`.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub slug: ArticleSlug,
    pub category: Option<String>,
    pub read_time: Option<String>,
    pub author_id: UserId,
}
