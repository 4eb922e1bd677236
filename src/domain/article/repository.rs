use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert one article. A taken slug surfaces as `DomainError::Conflict`.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Every article, newest `published_at` first.
    async fn list_latest_first(&self) -> DomainResult<Vec<Article>>;
}
