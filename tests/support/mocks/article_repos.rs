// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use uuid::Uuid;

use daily_blog::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use daily_blog::domain::errors::{DomainError, DomainResult};

/// Article table stand-in. Counts fetches and inserts so tests can assert
/// that a code path did or did not touch the store.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    fetches: AtomicUsize,
    inserts: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            ..Self::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        if articles
            .iter()
            .any(|existing| existing.slug.as_str() == article.slug.as_str())
        {
            return Err(DomainError::Conflict(
                "an article with this slug already exists".into(),
            ));
        }

        let stored = Article {
            id: ArticleId::new(Uuid::new_v4())?,
            title: article.title,
            excerpt: article.excerpt,
            content: article.content,
            slug: article.slug,
            category: article.category,
            read_time: article.read_time,
            published_at: Utc::now(),
            author_id: Some(article.author_id),
        };
        articles.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn list_latest_first(&self) -> DomainResult<Vec<Article>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap().clone();
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(articles)
    }
}

/// Read side whose every fetch fails like a dropped connection.
#[derive(Default)]
pub struct FailingArticleRead {
    fetches: AtomicUsize,
}

impl FailingArticleRead {
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn list_latest_first(&self) -> DomainResult<Vec<Article>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("connection refused".into()))
    }
}
