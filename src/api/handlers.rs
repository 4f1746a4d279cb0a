//! Robot endpoints. Every handler runs inside exactly one storage session.

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	Json,
};
use log::{debug, info};
use serde::Deserialize;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::models::robot::Robot;
use crate::models::status::Status;
use crate::repositories::robot_repo::Access;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateParams {
	pub name: Option<String>,
	pub status: Option<Status>,
}

pub async fn root(State(state): State<AppState>) -> Json<String> {
	Json(state.robot_name.to_string())
}

pub async fn echo_status(
	State(state): State<AppState>,
	Path(status): Path<Status>,
) -> Json<String> {
	Json(format!("{} is {}", state.robot_name, status))
}

pub async fn list_robots(State(state): State<AppState>) -> ApiResult<Json<Vec<Robot>>> {
	let robots = state
		.repo
		.session(Access::Read, |session| Ok::<_, ApiError>(session.list_all()?))
		.await?;
	Ok(Json(robots))
}

pub async fn get_robot(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> ApiResult<Json<Robot>> {
	let robot = state
		.repo
		.session(Access::Read, move |session| {
			session.get(id)?.ok_or(ApiError::NotFound(id))
		})
		.await
		.inspect_err(|e| debug!("get_robot({}) failed: {}", id, e))?;
	Ok(Json(robot))
}

pub async fn create_robot(
	State(state): State<AppState>,
	Path((name, status)): Path<(String, Status)>,
) -> ApiResult<(StatusCode, Json<Robot>)> {
	let robot = state
		.repo
		.session(Access::Write, move |session| {
			if session.exists_by_name(&name)? {
				return Err(ApiError::Conflict(format!("Robot \"{}\" already exists", name)));
			}
			let id = session.insert(&name, status)?;
			Ok(Robot { id, name, status })
		})
		.await
		.inspect_err(|e| debug!("create_robot failed: {}", e))?;

	info!("Created robot {} \"{}\" ({})", robot.id, robot.name, robot.status);
	Ok((StatusCode::CREATED, Json(robot)))
}

pub async fn update_robot(
	State(state): State<AppState>,
	Path(id): Path<i64>,
	Query(params): Query<UpdateParams>,
) -> ApiResult<StatusCode> {
	let UpdateParams { name, status } = params;
	if name.as_deref() == Some("") {
		return Err(ApiError::InvalidArgument("Robot name must not be empty".to_string()));
	}

	state
		.repo
		.session(Access::Write, move |session| {
			if !session.exists_by_id(id)? {
				return Err(ApiError::NotFound(id));
			}
			session.update(id, name.as_deref(), status)?;
			Ok(())
		})
		.await
		.inspect_err(|e| debug!("update_robot({}) failed: {}", id, e))?;

	info!("Updated robot {}", id);
	Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_robot(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
	state
		.repo
		.session(Access::Write, move |session| {
			if !session.exists_by_id(id)? {
				return Err(ApiError::NotFound(id));
			}
			session.delete(id)?;
			Ok(())
		})
		.await
		.inspect_err(|e| debug!("delete_robot({}) failed: {}", id, e))?;

	info!("Deleted robot {}", id);
	Ok(StatusCode::NO_CONTENT)
}
