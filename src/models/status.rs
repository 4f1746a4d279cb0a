// src/models/status.rs

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of states a robot can report.
///
/// The lowercase name is the only representation used on the wire and in the
/// `robots.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	Idle,
	Working,
	Broken,
	Lost,
	Charging,
	Sleeping,
	Cleaning,
	Error,
	Unknown,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid status: \"{0}\"")]
pub struct ParseStatusError(pub String);

impl Status {
	pub const ALL: [Status; 9] = [
		Status::Idle,
		Status::Working,
		Status::Broken,
		Status::Lost,
		Status::Charging,
		Status::Sleeping,
		Status::Cleaning,
		Status::Error,
		Status::Unknown,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Status::Idle => "idle",
			Status::Working => "working",
			Status::Broken => "broken",
			Status::Lost => "lost",
			Status::Charging => "charging",
			Status::Sleeping => "sleeping",
			Status::Cleaning => "cleaning",
			Status::Error => "error",
			Status::Unknown => "unknown",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Status {
	type Err = ParseStatusError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Status::ALL
			.into_iter()
			.find(|status| status.as_str() == s)
			.ok_or_else(|| ParseStatusError(s.to_string()))
	}
}

impl ToSql for Status {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(ToSqlOutput::from(self.as_str()))
	}
}

impl FromSql for Status {
	fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
		value
			.as_str()?
			.parse()
			.map_err(|e| FromSqlError::Other(Box::new(e)))
	}
}
