// src/repositories/robot_repo.rs

use crate::db::connection::SqlitePool;
use crate::db::error::{StoreError, StoreResult};
use crate::db::schema;
use crate::models::robot::Robot;
use crate::models::status::Status;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::sync::Arc;
use tokio::task;

/// How a session intends to use the database.
///
/// Write sessions take the SQLite write lock up front, so an existence check
/// and the mutation that follows it see the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
	Read,
	Write,
}

impl Access {
	fn behavior(self) -> TransactionBehavior {
		match self {
			Access::Read => TransactionBehavior::Deferred,
			Access::Write => TransactionBehavior::Immediate,
		}
	}
}

/// One pooled connection plus the transaction bound to a single request.
///
/// Dropping a session without calling `commit` rolls back everything it wrote.
pub struct Session<'conn> {
	tx: Transaction<'conn>,
}

impl<'conn> Session<'conn> {
	fn begin(conn: &'conn mut Connection, access: Access) -> StoreResult<Self> {
		let tx = conn.transaction_with_behavior(access.behavior())?;
		let session = Self { tx };
		session.ensure_schema()?;
		Ok(session)
	}

	fn commit(self) -> StoreResult<()> {
		self.tx.commit()?;
		Ok(())
	}

	pub fn ensure_schema(&self) -> StoreResult<()> {
		schema::create_tables(&self.tx)?;
		Ok(())
	}

	/// Inserts a robot and returns its new id. Name uniqueness is enforced by
	/// the table, not checked here.
	pub fn insert(&self, name: &str, status: Status) -> StoreResult<i64> {
		self.tx.execute(
			"INSERT INTO robots (name, status) VALUES (?1, ?2)",
			params![name, status],
		)?;
		Ok(self.tx.last_insert_rowid())
	}

	pub fn get(&self, id: i64) -> StoreResult<Option<Robot>> {
		let robot = self
			.tx
			.query_row(
				"SELECT id, name, status FROM robots WHERE id = ?1",
				params![id],
				robot_from_row,
			)
			.optional()?;
		Ok(robot)
	}

	pub fn list_all(&self) -> StoreResult<Vec<Robot>> {
		let mut stmt = self.tx.prepare("SELECT id, name, status FROM robots ORDER BY id")?;
		let robots = stmt
			.query_map([], robot_from_row)?
			.collect::<rusqlite::Result<Vec<_>>>()?;
		Ok(robots)
	}

	pub fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
		let exists = self.tx.query_row(
			"SELECT EXISTS(SELECT 1 FROM robots WHERE id = ?1)",
			params![id],
			|row| row.get(0),
		)?;
		Ok(exists)
	}

	pub fn exists_by_name(&self, name: &str) -> StoreResult<bool> {
		let exists = self.tx.query_row(
			"SELECT EXISTS(SELECT 1 FROM robots WHERE name = ?1)",
			params![name],
			|row| row.get(0),
		)?;
		Ok(exists)
	}

	/// Updates the supplied fields of robot `id`. Returns `false` when no such
	/// robot exists.
	pub fn update(&self, id: i64, name: Option<&str>, status: Option<Status>) -> StoreResult<bool> {
		if name.is_none() && status.is_none() {
			return Err(StoreError::InvalidArgument(
				"There are no changes to update".to_string(),
			));
		}

		let changed = self.tx.execute(
			"UPDATE robots
			 SET name = COALESCE(?1, name), status = COALESCE(?2, status)
			 WHERE id = ?3",
			params![name, status, id],
		)?;
		Ok(changed == 1)
	}

	/// Removes robot `id`. Deleting a missing robot is not an error; the
	/// return value says whether a row was removed.
	pub fn delete(&self, id: i64) -> StoreResult<bool> {
		let removed = self.tx.execute("DELETE FROM robots WHERE id = ?1", params![id])?;
		Ok(removed == 1)
	}
}

fn robot_from_row(row: &Row<'_>) -> rusqlite::Result<Robot> {
	Ok(Robot {
		id: row.get(0)?,
		name: row.get(1)?,
		status: row.get(2)?,
	})
}

pub struct RobotRepository {
	pool: Arc<SqlitePool>,
}

impl RobotRepository {
	pub fn new(pool: Arc<SqlitePool>) -> Self {
		Self { pool }
	}

	/// Runs `body` inside a fresh session on the blocking thread pool.
	///
	/// The session commits when `body` returns `Ok` and rolls back otherwise,
	/// including when `body` panics.
	pub async fn session<F, T, E>(&self, access: Access, body: F) -> Result<T, E>
	where
		F: FnOnce(&Session<'_>) -> Result<T, E> + Send + 'static,
		T: Send + 'static,
		E: From<StoreError> + Send + 'static,
	{
		let pool = self.pool.clone();
		task::spawn_blocking(move || -> Result<T, E> {
			let mut conn = pool.get().map_err(StoreError::from)?;
			let session = Session::begin(&mut conn, access)?;
			let value = body(&session)?;
			session.commit()?;
			Ok(value)
		})
			.await
			.map_err(StoreError::from)?
	}

	/// Creates the schema once, outside of any request.
	pub async fn init_schema(&self) -> StoreResult<()> {
		self.session(Access::Write, |session| session.ensure_schema()).await
	}
}
