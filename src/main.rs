use std::sync::Arc;

use payment_simulator::infrastructure::config::settings::Config;
use payment_simulator::infrastructure::logging;
use payment_simulator::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(Config::load().expect("Failed to load configuration"));
	logging::init(config.json_logs).expect("Failed to initialize logging");
	run(config).await
}
