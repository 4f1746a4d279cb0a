// src/models/robot.rs

use crate::models::status::Status;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
	pub id: i64,
	pub name: String,
	pub status: Status,
}
