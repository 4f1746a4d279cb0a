//! Request-level errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::db::error::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("Robot \"{0}\" not found")]
	NotFound(i64),

	/// Duplicate robot name. Reported as 400 to match the create contract.
	#[error("{0}")]
	Conflict(String),

	#[error("{0}")]
	InvalidArgument(String),

	#[error("Internal error: {0}")]
	Internal(StoreError),
}

impl ApiError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
			ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn detail(&self) -> String {
		match self {
			ApiError::Internal(_) => "Internal server error".to_string(),
			other => other.to_string(),
		}
	}
}

impl From<StoreError> for ApiError {
	fn from(err: StoreError) -> Self {
		match err {
			StoreError::ConstraintViolation(message) => {
				ApiError::Conflict(format!("Robot name already exists ({})", message))
			}
			StoreError::InvalidArgument(message) => ApiError::InvalidArgument(message),
			other => ApiError::Internal(other),
		}
	}
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub detail: String,
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		if let ApiError::Internal(ref cause) = self {
			error!("Request failed: {}", cause);
		}
		let status = self.status_code();
		let body = Json(ErrorResponse { detail: self.detail() });
		(status, body).into_response()
	}
}
