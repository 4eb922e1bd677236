// src/application/queries/articles/feed.rs
use std::sync::Arc;

use super::ArticleQueryService;
use crate::{
    application::dto::{ArticleDto, ArticleListingDto},
    domain::article::{Article, filter_by_title, partition_featured},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    NotLoaded,
    Loaded,
    /// The last load failed; the article list is empty.
    Failed(String),
}

/// Fetches the article collection once per load and serves listings from
/// the fetched copy.
pub struct ArticleFeed {
    queries: Arc<ArticleQueryService>,
    articles: Vec<Article>,
    loading: bool,
    status: FeedStatus,
}

impl ArticleFeed {
    pub fn new(queries: Arc<ArticleQueryService>) -> Self {
        Self {
            queries,
            articles: Vec::new(),
            loading: false,
            status: FeedStatus::NotLoaded,
        }
    }

    /// Run the fetch. Failures are logged and recorded in [`FeedStatus`];
    /// nothing is retried.
    pub async fn load(&mut self) -> &FeedStatus {
        self.loading = true;
        match self.queries.list_articles().await {
            Ok(articles) => {
                tracing::debug!(count = articles.len(), "articles fetched");
                self.articles = articles;
                self.status = FeedStatus::Loaded;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch articles");
                self.articles.clear();
                self.status = FeedStatus::Failed(err.user_message().to_string());
            }
        }
        self.loading = false;
        &self.status
    }

    /// Set only for the duration of `load`, which holds `&mut self`.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.status, FeedStatus::Failed(_))
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Flat list, newest first.
    pub fn to_dtos(&self) -> Vec<ArticleDto> {
        self.articles.iter().cloned().map(Into::into).collect()
    }

    /// Filter by title and split into featured/recent.
    pub fn listing(&self, search: &str) -> ArticleListingDto {
        partition_featured(filter_by_title(&self.articles, search)).into()
    }
}
