// src/presentation/http/controllers/auth.rs
use crate::application::{
    dto::{FormFeedback, SessionDto, UserDto},
    forms::AuthMode,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, feedback_status};
use crate::presentation::http::extractors::Session;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub feedback: FormFeedback,
    pub session: SessionDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

async fn submit_auth_form(
    state: &HttpState,
    mode: AuthMode,
    email: String,
    password: String,
    confirm_password: Option<String>,
    success: StatusCode,
) -> Response {
    let mut form = state.services.auth_form();
    form.set_mode(mode);
    form.set_email(email);
    form.set_password(password);
    if let Some(confirm) = confirm_password {
        form.set_confirm_password(confirm);
    }

    match form.submit().await {
        Ok(submitted) => (
            success,
            Json(AuthResponse {
                feedback: submitted.feedback,
                session: submitted.value,
            }),
        )
            .into_response(),
        Err(feedback) => (feedback_status(&feedback), Json(feedback)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created and signed in.", body = AuthResponse),
        (status = 409, description = "Email already registered.", body = FormFeedback),
        (status = 422, description = "Passwords don't match or are too short.", body = FormFeedback)
    ),
    tag = "Auth"
)]
pub async fn sign_up(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SignUpRequest>,
) -> Response {
    submit_auth_form(
        &state,
        AuthMode::SignUp,
        payload.email,
        payload.password,
        Some(payload.confirm_password),
        StatusCode::CREATED,
    )
    .await
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in.", body = AuthResponse),
        (status = 401, description = "Invalid login credentials.", body = FormFeedback)
    ),
    tag = "Auth"
)]
pub async fn sign_in(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SignInRequest>,
) -> Response {
    submit_auth_form(
        &state,
        AuthMode::SignIn,
        payload.email,
        payload.password,
        None,
        StatusCode::OK,
    )
    .await
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-out",
    responses(
        (status = 204, description = "Session revoked (no-op without a session).")
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn sign_out(
    Extension(state): Extension<HttpState>,
    Session(mut session): Session,
) -> HttpResult<StatusCode> {
    state
        .services
        .auth_commands
        .sign_out(&mut session)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    responses(
        (status = 200, description = "Current session, if any.", body = SessionStatusResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn current_session(Session(session): Session) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        authenticated: session.is_authenticated(),
        user: session.user().map(UserDto::from),
    })
}
