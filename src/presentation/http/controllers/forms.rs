// src/presentation/http/controllers/forms.rs
use crate::application::{dto::FormFeedback, forms::ContactFieldErrors};
use crate::presentation::http::error::feedback_status;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FormResponse {
    pub feedback: FormFeedback,
    /// Required fields that were blank, when validation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<ContactFieldErrors>,
}

fn respond(
    success: StatusCode,
    feedback: FormFeedback,
    field_errors: Option<ContactFieldErrors>,
) -> Response {
    let status = if feedback.is_success() {
        success
    } else {
        feedback_status(&feedback)
    };
    (
        status,
        Json(FormResponse {
            feedback,
            field_errors,
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed.", body = FormResponse),
        (status = 409, description = "Email already subscribed.", body = FormResponse),
        (status = 422, description = "Email missing or malformed.", body = FormResponse)
    ),
    tag = "Forms"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> Response {
    let mut form = state.services.subscribe_form();
    form.set_email(payload.email);

    let feedback = match form.submit().await {
        Ok(submitted) => submitted.feedback,
        Err(feedback) => feedback,
    };
    respond(StatusCode::CREATED, feedback, None)
}

#[utoipa::path(
    post,
    path = "/api/v1/contact-messages",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored.", body = FormResponse),
        (status = 422, description = "Required fields missing.", body = FormResponse)
    ),
    tag = "Forms"
)]
pub async fn send_contact_message(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> Response {
    let mut form = state.services.contact_form();
    form.set_name(payload.name);
    form.set_email(payload.email);
    form.set_contact_number(payload.contact_number.unwrap_or_default());
    form.set_message(payload.message);

    match form.submit().await {
        Ok(submitted) => respond(StatusCode::CREATED, submitted.feedback, None),
        Err(feedback) => {
            let errors = form.errors();
            respond(StatusCode::CREATED, feedback, errors.any().then_some(errors))
        }
    }
}
