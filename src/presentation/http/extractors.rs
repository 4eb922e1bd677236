// src/presentation/http/extractors.rs
use crate::{
    application::{error::ApplicationError, session::SessionContext},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Session context for the request. Requests without a (live) bearer
/// token get an anonymous context rather than a rejection.
#[derive(Debug, Clone)]
pub struct Session(pub SessionContext);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let token = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|header| header.token().to_string());

        let session = app_state
            .services
            .session_queries
            .current_session(token.as_deref())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(session))
    }
}
