use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};
use log::info;

pub type SqlitePool = Pool<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Establishes a connection pool over the SQLite file at `path`
pub fn establish_pool_with_path(path: PathBuf, max_size: u32) -> Result<SqlitePool> {
	info!("SQLite database will be located at: {:?}", path);

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.context("Failed to create database directory")?;
	}

	// Writers queue on the file lock instead of failing with SQLITE_BUSY.
	let manager = SqliteConnectionManager::file(path)
		.with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));

	let pool = Pool::builder()
		.max_size(max_size)
		.build(manager)
		.context("Failed to create SQLite connection pool")?;

	info!("SQLite connection pool established successfully (max_size = {})", max_size);
	Ok(pool)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn test_pool_creates_missing_directories() -> Result<()> {
		let dir = tempdir()?;
		let db_path = dir.path().join("nested").join("robots.db");

		let pool = establish_pool_with_path(db_path.clone(), 2)?;
		let conn = pool.get()?;
		conn.execute_batch("CREATE TABLE probe (x INTEGER)")?;

		assert!(db_path.exists());
		assert_eq!(pool.max_size(), 2);
		Ok(())
	}
}
