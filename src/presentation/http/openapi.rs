// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const LOCAL_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::forms::subscribe,
        crate::presentation::http::controllers::forms::send_contact_message,
        crate::presentation::http::controllers::auth::sign_up,
        crate::presentation::http::controllers::auth::sign_in,
        crate::presentation::http::controllers::auth::sign_out,
        crate::presentation::http::controllers::auth::current_session,
        crate::presentation::http::controllers::views::admin,
        crate::presentation::http::controllers::views::sign_in_view,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::PublishArticleResponse,
            crate::presentation::http::controllers::forms::SubscribeRequest,
            crate::presentation::http::controllers::forms::ContactRequest,
            crate::presentation::http::controllers::forms::FormResponse,
            crate::presentation::http::controllers::auth::SignInRequest,
            crate::presentation::http::controllers::auth::SignUpRequest,
            crate::presentation::http::controllers::auth::AuthResponse,
            crate::presentation::http::controllers::auth::SessionStatusResponse,
            crate::presentation::http::controllers::views::AdminDashboard,
            crate::presentation::http::controllers::views::AuthView,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListingDto,
            crate::application::dto::FormFeedback,
            crate::application::dto::FeedbackKind,
            crate::application::dto::SessionDto,
            crate::application::dto::UserDto,
            crate::application::forms::ContactFieldErrors,
            crate::application::forms::AuthMode,
            crate::application::gate::View
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and authoring"),
        (name = "Forms", description = "Newsletter and contact forms"),
        (name = "Auth", description = "Sign-up, sign-in and session endpoints"),
        (name = "Views", description = "Gated page endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Daily Blog API",
        description = "Articles, newsletter subscriptions and contact messages",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("opaque".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| LOCAL_SERVER_URL.to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

/// Swagger UI at `/docs` (serving `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
