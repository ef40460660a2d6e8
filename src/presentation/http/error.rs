// src/presentation/http/error.rs
use crate::domain::{
    errors::{DomainResult, Error},
    validation::Errors,
};
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Problem-details body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    title: &'static str,
    detail: String,
}

impl HttpError {
    /// Every error is logged; only the first one reaches the client.
    pub fn from_failure(title: &'static str, errors: Errors<Error>) -> Self {
        for (index, error) in errors.iter().enumerate() {
            warn!(
                title,
                index,
                kind = %error.kind(),
                code = ?error.code(),
                error = %error,
                "request failed"
            );
        }
        Self {
            status: StatusCode::BAD_REQUEST,
            title,
            detail: errors.head().message().to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ProblemDetails {
            problem_type: "BadRequest".to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
        };
        (
            self.status,
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            Json(payload),
        )
            .into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self, title: &'static str) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self, title: &'static str) -> HttpResult<T> {
        self.match_with(Ok, |errors| Err(HttpError::from_failure(title, errors)))
    }
}
