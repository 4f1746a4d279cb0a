// src/config.rs

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Robot API - a small HTTP service managing robot records in SQLite
#[derive(Parser, Debug, Clone)]
#[command(name = "robot_api")]
#[command(version, about, long_about = None)]
pub struct Config {
	/// Path to the SQLite database file (created on demand)
	#[arg(long, default_value = "robots.db")]
	pub database: PathBuf,

	/// Address the HTTP server binds to
	#[arg(long, default_value = "127.0.0.1:8000")]
	pub bind: SocketAddr,

	/// Maximum number of pooled database connections
	#[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
	pub pool_size: u32,

	/// Name reported by `GET /` and `GET /{status}`
	#[arg(long, default_value = "Bender")]
	pub robot_name: String,

	/// Log filter used when RUST_LOG is not set
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_command_is_well_formed() {
		Config::command().debug_assert();
	}

	#[test]
	fn test_defaults() {
		let config = Config::try_parse_from(["robot_api"]).unwrap();
		assert_eq!(config.database, PathBuf::from("robots.db"));
		assert_eq!(config.bind, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
		assert_eq!(config.pool_size, 15);
		assert_eq!(config.robot_name, "Bender");
		assert_eq!(config.log_level, "info");
	}

	#[test]
	fn test_overrides_and_validation() {
		let config = Config::try_parse_from([
			"robot_api",
			"--database",
			"/tmp/fleet.db",
			"--bind",
			"0.0.0.0:9000",
			"--robot-name",
			"Marvin",
		])
		.unwrap();
		assert_eq!(config.database, PathBuf::from("/tmp/fleet.db"));
		assert_eq!(config.bind.port(), 9000);
		assert_eq!(config.robot_name, "Marvin");

		assert!(Config::try_parse_from(["robot_api", "--pool-size", "0"]).is_err());
		assert!(Config::try_parse_from(["robot_api", "--bind", "nowhere"]).is_err());
	}
}
