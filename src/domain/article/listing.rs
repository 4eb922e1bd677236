// src/domain/article/listing.rs
use crate::domain::article::entity::Article;

/// Keep the articles whose title contains `term`, ignoring case.
/// An empty term keeps everything. Order is preserved.
pub fn filter_by_title(articles: &[Article], term: &str) -> Vec<Article> {
    if term.is_empty() {
        return articles.to_vec();
    }

    let needle = term.to_lowercase();
    articles
        .iter()
        .filter(|article| article.title.as_str().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct FeaturedSplit {
    pub featured: Option<Article>,
    pub recent: Vec<Article>,
}

impl FeaturedSplit {
    pub fn is_empty(&self) -> bool {
        self.featured.is_none()
    }

    pub fn len(&self) -> usize {
        usize::from(self.featured.is_some()) + self.recent.len()
    }
}

/// Promote the first article to featured; the rest stay recent, in order.
pub fn partition_featured(articles: Vec<Article>) -> FeaturedSplit {
    let mut iter = articles.into_iter();
    match iter.next() {
        Some(featured) => FeaturedSplit {
            featured: Some(featured),
            recent: iter.collect(),
        },
        None => FeaturedSplit::default(),
    }
}
