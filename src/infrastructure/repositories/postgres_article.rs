// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, title, excerpt, content, slug, category, read_time, published_at, author_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    excerpt: Option<String>,
    content: String,
    slug: String,
    category: Option<String>,
    read_time: Option<String>,
    published_at: DateTime<Utc>,
    author_id: Option<Uuid>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            excerpt: row.excerpt,
            content: ArticleContent::new(row.content)?,
            slug: ArticleSlug::new(row.slug)?,
            category: row.category,
            read_time: row.read_time,
            published_at: row.published_at,
            author_id: row.author_id.map(UserId::new).transpose()?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    #[tracing::instrument(
        name = "insert article",
        skip(self, article),
        fields(slug = %article.slug)
    )]
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            excerpt,
            content,
            slug,
            category,
            read_time,
            author_id,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, excerpt, content, slug, category, read_time, author_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(excerpt)
            .bind(content.as_str())
            .bind(slug.as_str())
            .bind(category)
            .bind(read_time)
            .bind(Uuid::from(author_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    #[tracing::instrument(name = "list articles", skip(self))]
    async fn list_latest_first(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY published_at DESC");

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
