//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the axum Router for the robot endpoints
//! - Log every request with its outcome and latency
//! - Serve on a bound listener until a shutdown signal arrives

use axum::{
	extract::Request,
	middleware::{self, Next},
	response::Response,
	routing::{get, post},
	Router,
};
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

use crate::api::handlers;
use crate::repositories::robot_repo::RobotRepository;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
	pub repo: Arc<RobotRepository>,
	pub robot_name: Arc<str>,
}

impl AppState {
	pub fn new(repo: RobotRepository, robot_name: &str) -> Self {
		Self {
			repo: Arc::new(repo),
			robot_name: Arc::from(robot_name),
		}
	}
}

pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(handlers::root))
		.route("/robots", get(handlers::list_robots))
		.route("/{status}", get(handlers::echo_status))
		// Both robot routes must share the first parameter name: it is the id
		// for get/put/delete and the name on create.
		.route(
			"/robot/{robot}",
			get(handlers::get_robot)
				.put(handlers::update_robot)
				.delete(handlers::delete_robot),
		)
		.route("/robot/{robot}/{status}", post(handlers::create_robot))
		.with_state(state)
		.layer(middleware::from_fn(log_requests))
}

async fn log_requests(request: Request, next: Next) -> Response {
	let start = Instant::now();
	let method = request.method().clone();
	let path = request.uri().path().to_string();

	let response = next.run(request).await;

	let status = response.status();
	let elapsed = start.elapsed();
	if status.is_server_error() {
		error!("{} {} -> {} ({:?})", method, path, status.as_u16(), elapsed);
	} else {
		info!("{} {} -> {} ({:?})", method, path, status.as_u16(), elapsed);
	}
	response
}

/// Serve `router` on `listener` until Ctrl+C (or SIGTERM on unix).
pub async fn run(listener: TcpListener, router: Router) -> std::io::Result<()> {
	let addr = listener.local_addr()?;
	info!("HTTP server listening on {}", addr);

	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	info!("HTTP server stopped");
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			error!("Failed to listen for ctrl-c signal: {}", err);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(err) => {
				error!("Failed to listen for SIGTERM: {}", err);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => info!("Received Ctrl+C signal"),
		_ = terminate => info!("Received SIGTERM signal"),
	}
}
