use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use devguide_core::error::GuideError;
use thiserror::Error;

use crate::tools::ToolError;

// ---------------------------------------------------------------------------
// Status sentinels
// ---------------------------------------------------------------------------

/// Sentinel carried through the `anyhow::Error` chain to force a 400.
#[derive(Debug, Error)]
#[error("{0}")]
struct BadRequestError(String);

/// Sentinel carried through the `anyhow::Error` chain to force a 404.
#[derive(Debug, Error)]
#[error("{0}")]
struct NotFoundError(String);

// ---------------------------------------------------------------------------
// AppError and status mapping
// ---------------------------------------------------------------------------

/// Error type returned by every route handler. Renders as a JSON body with
/// an `error` field and a status derived from the wrapped error.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Wraps `msg` so the response goes out as a 400 Bad Request.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    /// Wraps `msg` so the response goes out as a 404 Not Found.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

fn status_for(err: &anyhow::Error) -> StatusCode {
    if err.downcast_ref::<BadRequestError>().is_some() {
        return StatusCode::BAD_REQUEST;
    }
    if err.downcast_ref::<NotFoundError>().is_some() {
        return StatusCode::NOT_FOUND;
    }
    if let Some(e) = err.downcast_ref::<ToolError>() {
        return tool_error_status(e);
    }
    if let Some(e) = err.downcast_ref::<GuideError>() {
        return guide_error_status(e);
    }
    StatusCode::INTERNAL_SERVER_ERROR
}

fn tool_error_status(e: &ToolError) -> StatusCode {
    match e {
        ToolError::MissingArgument(_) => StatusCode::BAD_REQUEST,
        ToolError::Guide(g) => guide_error_status(g),
        ToolError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn guide_error_status(e: &GuideError) -> StatusCode {
    match e {
        GuideError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        GuideError::NoCommandGenerated(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GuideError::InvalidStage(_) => StatusCode::BAD_REQUEST,
        GuideError::Io(_) | GuideError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
