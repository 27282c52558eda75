use std::time::Duration;

use config::{ConfigError, Environment};
use serde::{Deserialize, Deserializer};

use crate::domain::payment::PaymentSettings;
use crate::domain::slowdown::SlowdownPolicy;

pub const ENV_PREFIX: &str = "PAYMENT";

/// Flag values that enable a feature. Anything else, including an empty
/// value, leaves it off.
const ENABLED_FLAG_VALUES: [&str; 3] = ["true", "1", "yes"];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host:                  String,
	pub server_port:                  u16,
	pub server_keepalive:             u64,
	pub json_logs:                    bool,
	#[serde(deserialize_with = "deserialize_flag")]
	pub slowdown_enabled:             bool,
	pub slowdown_interval_secs:       u64,
	pub slowdown_duration_secs:       u64,
	pub slowdown_min_delay_ms:        u64,
	pub slowdown_max_delay_ms:        u64,
	pub slowdown_check_interval_secs: u64,
	pub failure_rate:                 f64,
	pub processing_delay_ms:          u64,
}

impl Config {
	pub fn load() -> Result<Self, ConfigError> {
		Self::from_environment(Environment::with_prefix(ENV_PREFIX))
	}

	pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 4002)?
			.set_default("server_keepalive", 75)?
			.set_default("json_logs", true)?
			.set_default("slowdown_enabled", "false")?
			.set_default("slowdown_interval_secs", 900)?
			.set_default("slowdown_duration_secs", 300)?
			.set_default("slowdown_min_delay_ms", 2000)?
			.set_default("slowdown_max_delay_ms", 5000)?
			.set_default("slowdown_check_interval_secs", 30)?
			.set_default("failure_rate", 0.05)?
			.set_default("processing_delay_ms", 500)?
			.add_source(environment)
			.build()?;

		let config: Config = config_builder.try_deserialize()?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(0.0..=1.0).contains(&self.failure_rate) {
			return Err(ConfigError::Message(format!(
				"failure_rate must be within [0, 1], got {}",
				self.failure_rate
			)));
		}
		if self.slowdown_min_delay_ms > self.slowdown_max_delay_ms {
			return Err(ConfigError::Message(format!(
				"slowdown_min_delay_ms ({}) exceeds slowdown_max_delay_ms ({})",
				self.slowdown_min_delay_ms, self.slowdown_max_delay_ms
			)));
		}
		if self.slowdown_duration_secs == 0 {
			return Err(ConfigError::Message(
				"slowdown_duration_secs must be greater than zero".to_string(),
			));
		}
		if self.slowdown_check_interval_secs == 0 {
			return Err(ConfigError::Message(
				"slowdown_check_interval_secs must be greater than zero".to_string(),
			));
		}
		Ok(())
	}

	pub fn slowdown_policy(&self) -> SlowdownPolicy {
		SlowdownPolicy {
			interval:  Duration::from_secs(self.slowdown_interval_secs),
			duration:  Duration::from_secs(self.slowdown_duration_secs),
			min_delay: Duration::from_millis(self.slowdown_min_delay_ms),
			max_delay: Duration::from_millis(self.slowdown_max_delay_ms),
		}
	}

	pub fn slowdown_check_interval(&self) -> Duration {
		Duration::from_secs(self.slowdown_check_interval_secs)
	}

	pub fn payment_settings(&self) -> PaymentSettings {
		PaymentSettings {
			failure_rate:     self.failure_rate,
			processing_delay: Duration::from_millis(self.processing_delay_ms),
		}
	}
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;
	Ok(is_enabled_flag(&raw))
}

fn is_enabled_flag(raw: &str) -> bool {
	let value = raw.trim().to_lowercase();
	ENABLED_FLAG_VALUES.contains(&value.as_str())
}
