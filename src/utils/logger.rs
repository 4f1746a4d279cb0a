use env_logger::{Builder, Env};

/// Installs the global logger. `RUST_LOG`, when set, wins over `default_filter`.
pub fn init(default_filter: &str) {
	Builder::from_env(Env::default().default_filter_or(default_filter))
		.format_timestamp_millis()
		.format_module_path(true)
		.init();
}
