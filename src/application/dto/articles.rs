use crate::domain::article::{Article, FeaturedSplit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    pub slug: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            content: article.content.into_inner(),
            slug: article.slug.into_inner(),
            category: article.category,
            read_time: article.read_time,
            published_at: article.published_at,
            author_id: article.author_id.map(Into::into),
        }
    }
}

pub const EMPTY_LISTING_MESSAGE: &str = "No articles found.";

/// Listing as shown on the home page: one featured article, the rest recent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListingDto {
    #[serde(default)]
    pub featured: Option<ArticleDto>,
    pub recent: Vec<ArticleDto>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl From<FeaturedSplit> for ArticleListingDto {
    fn from(split: FeaturedSplit) -> Self {
        let total = split.len();
        let empty_message = split
            .is_empty()
            .then(|| EMPTY_LISTING_MESSAGE.to_string());
        Self {
            featured: split.featured.map(Into::into),
            recent: split.recent.into_iter().map(Into::into).collect(),
            total,
            empty_message,
        }
    }
}
