use std::net::TcpListener;
use std::sync::Arc;

use payment_simulator::infrastructure::config::settings::Config;
use payment_simulator::run;

#[actix_web::test]
async fn test_run_bind_error() {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();

	let config = Config {
		server_host:                  "127.0.0.1".to_string(),
		server_port:                  port,
		server_keepalive:             75,
		json_logs:                    false,
		slowdown_enabled:             true,
		slowdown_interval_secs:       900,
		slowdown_duration_secs:       300,
		slowdown_min_delay_ms:        2000,
		slowdown_max_delay_ms:        5000,
		slowdown_check_interval_secs: 30,
		failure_rate:                 0.05,
		processing_delay_ms:          500,
	};

	assert!(run(Arc::new(config)).await.is_err());
	drop(listener);
}
