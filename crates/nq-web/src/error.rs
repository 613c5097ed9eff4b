//! HTTP mapping for the core error taxonomy.
//!
//! `AppError` lives in nq-core, which knows nothing about actix, so a thin
//! newtype carries the `ResponseError` impl.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use nq_core::error::AppError;

#[derive(Debug)]
pub struct WebError(pub AppError);

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::Validation(..) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(..) => StatusCode::FORBIDDEN,
            AppError::Internal(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
