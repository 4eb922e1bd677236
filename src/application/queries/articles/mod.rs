mod feed;
mod list;
mod service;

pub use feed::{ArticleFeed, FeedStatus};
pub use service::ArticleQueryService;
