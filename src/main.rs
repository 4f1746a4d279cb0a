// src/main.rs

mod api;
mod config;
mod db;
mod models;
mod repositories;
mod utils;

use anyhow::{Context, Result};
use api::AppState;
use clap::Parser;
use config::Config;
use db::connection::{self, SqlitePool};
use log::info;
use repositories::robot_repo::RobotRepository;
use std::sync::Arc;
use tokio::net::TcpListener;

struct App {
	config: Config,
	pool: Arc<SqlitePool>,
}

impl App {
	fn new(config: Config) -> Result<Self> {
		info!("Starting Robot API");

		let pool = Arc::new(
			connection::establish_pool_with_path(config.database.clone(), config.pool_size)
				.context("Failed to establish database connection pool")?,
		);

		Ok(App { config, pool })
	}

	async fn init_database(&self, repo: &RobotRepository) -> Result<()> {
		repo.init_schema().await.context("Failed to create database tables")?;
		info!("Database tables initialized successfully");
		Ok(())
	}

	async fn run(self) -> Result<()> {
		let repo = RobotRepository::new(self.pool.clone());
		self.init_database(&repo).await?;

		let state = AppState::new(repo, &self.config.robot_name);
		let router = api::build_router(state);

		let listener = TcpListener::bind(self.config.bind)
			.await
			.with_context(|| format!("Failed to bind {}", self.config.bind))?;

		api::server::run(listener, router)
			.await
			.context("HTTP server error")?;

		info!("Shutdown complete");
		Ok(())
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let config = Config::parse();
	utils::logger::init(&config.log_level);

	let app = App::new(config)?;
	app.run().await
}
