use rusqlite::Connection;

/// Creates the robots table if it does not exist yet. Safe to call on every
/// session open.
///
/// `AUTOINCREMENT` keeps ids monotonic so a deleted robot's id is never
/// handed out again.
pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
	conn.execute_batch(
		"
		CREATE TABLE IF NOT EXISTS robots (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT NOT NULL UNIQUE,
			status TEXT NOT NULL
		);
		"
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_create_tables_is_idempotent() -> rusqlite::Result<()> {
		let conn = Connection::open_in_memory()?;
		create_tables(&conn)?;
		create_tables(&conn)?;

		let count: i64 = conn.query_row(
			"SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'robots'",
			[],
			|row| row.get(0),
		)?;
		assert_eq!(count, 1);
		Ok(())
	}

	#[test]
	fn test_name_is_unique() -> rusqlite::Result<()> {
		let conn = Connection::open_in_memory()?;
		create_tables(&conn)?;

		conn.execute("INSERT INTO robots (name, status) VALUES ('R2', 'idle')", [])?;
		let duplicate = conn.execute("INSERT INTO robots (name, status) VALUES ('R2', 'lost')", []);
		assert!(duplicate.is_err());
		Ok(())
	}
}
