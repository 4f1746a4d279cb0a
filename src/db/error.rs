use rusqlite::ErrorCode;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the storage provider.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("Failed to get database connection: {0}")]
	Pool(#[from] r2d2::Error),

	#[error("Database error: {0}")]
	Sqlite(rusqlite::Error),

	#[error("Constraint violation: {0}")]
	ConstraintViolation(String),

	#[error("{0}")]
	InvalidArgument(String),

	#[error("Failed to execute database operation: {0}")]
	Join(#[from] tokio::task::JoinError),
}

impl From<rusqlite::Error> for StoreError {
	fn from(err: rusqlite::Error) -> Self {
		match err {
			rusqlite::Error::SqliteFailure(ref failure, ref message)
				if failure.code == ErrorCode::ConstraintViolation =>
			{
				let detail = message.clone().unwrap_or_else(|| failure.to_string());
				StoreError::ConstraintViolation(detail)
			}
			other => StoreError::Sqlite(other),
		}
	}
}
