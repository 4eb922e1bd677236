// src/presentation/http/controllers/views.rs
//! Gated page endpoints. Each applies the auth gate before doing any work.
use super::articles::FETCH_FAILED_MESSAGE;
use crate::application::{
    dto::ArticleDto,
    gate::{AuthGate, GateDecision, View},
};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::Session;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const NO_ARTICLES_MESSAGE: &str = "No articles published yet. Create your first article!";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboard {
    pub email: String,
    pub article_count: usize,
    pub articles: Vec<ArticleDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthView {
    pub view: View,
    pub title: String,
    pub description: String,
}

fn redirect(to: View) -> Response {
    Redirect::to(to.path()).into_response()
}

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Dashboard for the signed-in author.", body = AdminDashboard),
        (status = 303, description = "No session; redirected to the sign-in view.")
    ),
    security(("bearerAuth" = [])),
    tag = "Views"
)]
pub async fn admin(Extension(state): Extension<HttpState>, Session(session): Session) -> Response {
    if let GateDecision::Redirect(to) = AuthGate::evaluate(View::Admin, &session) {
        return redirect(to);
    }
    let Some(user) = session.user() else {
        return redirect(View::SignIn);
    };

    let mut feed = state.services.article_feed();
    feed.load().await;
    if feed.has_failed() {
        return HttpError::service_unavailable(FETCH_FAILED_MESSAGE).into_response();
    }

    let articles = feed.to_dtos();
    Json(AdminDashboard {
        email: user.email.clone(),
        article_count: articles.len(),
        empty_message: articles
            .is_empty()
            .then(|| NO_ARTICLES_MESSAGE.to_string()),
        articles,
    })
    .into_response()
}

#[utoipa::path(
    get,
    path = "/auth",
    responses(
        (status = 200, description = "Sign-in view.", body = AuthView),
        (status = 303, description = "Already signed in; redirected home.")
    ),
    tag = "Views"
)]
pub async fn sign_in_view(Session(session): Session) -> Response {
    if let GateDecision::Redirect(to) = AuthGate::evaluate(View::SignIn, &session) {
        return redirect(to);
    }

    Json(AuthView {
        view: View::SignIn,
        title: "Welcome Back".into(),
        description: "Sign in to access the admin dashboard".into(),
    })
    .into_response()
}
