// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleDto, ArticleListingDto, FormFeedback},
    queries::articles::FeedStatus,
};
use crate::presentation::http::error::{HttpError, HttpResult, feedback_status};
use crate::presentation::http::extractors::Session;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub(super) const FETCH_FAILED_MESSAGE: &str = "Failed to fetch articles";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ArticleListParams {
    /// Case-insensitive title filter. Empty or missing lists everything.
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublishArticleResponse {
    pub feedback: FormFeedback,
    pub article: ArticleDto,
    /// Article count after the post-publish refresh.
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Featured article plus recent articles.", body = ArticleListingDto),
        (status = 503, description = "Articles could not be fetched.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListingDto>> {
    let mut feed = state.services.article_feed();
    if let FeedStatus::Failed(_) = feed.load().await {
        return Err(HttpError::service_unavailable(FETCH_FAILED_MESSAGE));
    }

    let search = params.q.unwrap_or_default();
    Ok(Json(feed.listing(&search)))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article published.", body = PublishArticleResponse),
        (status = 401, description = "No live session.", body = FormFeedback),
        (status = 409, description = "Slug already taken.", body = FormFeedback),
        (status = 422, description = "Title or content missing.", body = FormFeedback)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<CreateArticleRequest>,
) -> Response {
    let mut form = state.services.author_form();
    form.set_title(payload.title);
    form.set_content(payload.content);
    form.set_category(payload.category.unwrap_or_default());
    form.set_read_time(payload.read_time.unwrap_or_default());
    form.set_slug(payload.slug.unwrap_or_default());

    let mut feed = state.services.article_feed();
    match form.submit(&session, &mut feed).await {
        Ok(submitted) => (
            StatusCode::CREATED,
            Json(PublishArticleResponse {
                feedback: submitted.feedback,
                article: submitted.value,
                total: feed.len(),
            }),
        )
            .into_response(),
        Err(feedback) => (feedback_status(&feedback), Json(feedback)).into_response(),
    }
}
