use std::io::Write;

use env_logger::{Builder, Env};
use log::{Record, SetLoggerError};
use serde_json::{Value, json};

/// Installs the global logger, `info` unless `RUST_LOG` says otherwise.
/// With `json_logs` each record is emitted as a single JSON object.
pub fn init(json_logs: bool) -> Result<(), SetLoggerError> {
	let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

	if json_logs {
		builder.format(|buf, record| {
			let line = json_line(&buf.timestamp().to_string(), record);
			writeln!(buf, "{line}")
		});
	}

	builder.try_init()
}

fn json_line(timestamp: &str, record: &Record<'_>) -> Value {
	json!({
		"timestamp": timestamp,
		"level":     record.level().to_string(),
		"logger":    record.target(),
		"message":   record.args().to_string(),
	})
}
