// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use daily_blog::domain::article::{Article, ArticleContent, ArticleId, ArticleSlug, ArticleTitle};

pub struct ArticleBuilder {
    title: String,
    content: String,
    slug: Option<String>,
    category: Option<String>,
    read_time: Option<String>,
    published_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: "Body text".into(),
            slug: None,
            category: None,
            read_time: None,
            published_at: Utc::now(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = Some(read_time.into());
        self
    }

    /// Published `days` days before now.
    pub fn days_ago(mut self, days: i64) -> Self {
        self.published_at = Utc::now() - Duration::days(days);
        self
    }

    pub fn build(self) -> Article {
        let title = ArticleTitle::new(self.title).unwrap();
        let slug = match self.slug {
            Some(slug) => ArticleSlug::new(slug).unwrap(),
            None => ArticleSlug::from_title(&title).unwrap(),
        };
        Article {
            id: ArticleId::new(Uuid::new_v4()).unwrap(),
            title,
            excerpt: None,
            content: ArticleContent::new(self.content).unwrap(),
            slug,
            category: self.category,
            read_time: self.read_time,
            published_at: self.published_at,
            author_id: None,
        }
    }
}

/// Three articles stored out of order. Newest first they are "Morning Pages",
/// "The Art of Mindful Writing!", "Evening Walks".
pub fn sample_articles() -> Vec<Article> {
    vec![
        ArticleBuilder::new("Evening Walks").days_ago(3).build(),
        ArticleBuilder::new("Morning Pages")
            .category("Habits")
            .read_time("4 min read")
            .days_ago(1)
            .build(),
        ArticleBuilder::new("The Art of Mindful Writing!")
            .days_ago(2)
            .build(),
    ]
}
