use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber, writing to stderr so stdout only
/// carries tweets.
pub fn init_logging(level: &str) -> Result<(), String> {
	let filter = EnvFilter::try_new(level).map_err(|e| format!("Invalid log level: {e}"))?;
	fmt()
		.with_env_filter(filter)
		.with_target(true)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|_| "Logging already initialized".to_owned())
}
