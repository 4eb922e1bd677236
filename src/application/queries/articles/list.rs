use super::ArticleQueryService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleQueryService {
    /// Every article, most recently published first.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<Article>> {
        let articles = self.read_repo.list_latest_first().await?;
        Ok(articles)
    }
}
