pub mod articles;
pub mod auth;
pub mod feedback;

pub use articles::{ArticleDto, ArticleListingDto};
pub use auth::{CurrentUser, SessionDto, UserDto};
pub use feedback::{FeedbackKind, FormFeedback};
