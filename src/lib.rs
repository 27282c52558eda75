use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use log::info;
use tokio::sync::watch;

use crate::adapters::web::{health_handler, payments_handler};
use crate::domain::random::RandomSource;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::random::thread_random_source::ThreadRandomSource;
use crate::infrastructure::slowdown::slowdown_monitor::SlowdownMonitor;
use crate::infrastructure::workers::slowdown_monitor_worker::{
	slowdown_monitor_worker, stop_slowdown_monitor_worker,
};
use crate::use_cases::process_payment::ProcessPaymentUseCase;

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod health_handler;
		pub mod payments_handler;
		pub mod schema;
	}
}

pub mod domain {
	pub mod payment;
	pub mod random;
	pub mod slowdown;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod logging;
	pub mod random {
		pub mod thread_random_source;
	}
	pub mod slowdown {
		pub mod slowdown_monitor;
	}
	pub mod workers {
		pub mod slowdown_monitor_worker;
	}
}

pub mod use_cases {
	pub mod dto;
	pub mod process_payment;
}

const ACCESS_LOG_FORMAT: &str =
	"%a \"%r\" %s %b %Dms traceparent=%{traceparent}i tracestate=%{tracestate}i";

/// Allows any origin, method and header, and answers preflight requests.
pub fn cors() -> Cors {
	Cors::permissive()
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let random: Arc<dyn RandomSource> = Arc::new(ThreadRandomSource::new());
	let policy = config.slowdown_policy();
	let slowdown_monitor =
		SlowdownMonitor::new(config.slowdown_enabled, policy, random.clone());
	let process_payment_use_case = ProcessPaymentUseCase::new(
		slowdown_monitor.clone(),
		random,
		config.payment_settings(),
	);

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);
	let server = HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::new(ACCESS_LOG_FORMAT))
			.wrap(cors())
			.app_data(payments_handler::json_config())
			.app_data(web::Data::new(process_payment_use_case.clone()))
			.service(payments_handler::payment)
			.service(health_handler::health)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run();

	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	let worker = if config.slowdown_enabled {
		info!(
			"Payment slowdown simulation enabled: event=slowdown_feature_status \
			 status=enabled interval_seconds={} duration_seconds={} \
			 delay_range_seconds={}-{}",
			policy.interval.as_secs(),
			policy.duration.as_secs(),
			policy.min_delay.as_secs_f64(),
			policy.max_delay.as_secs_f64()
		);
		Some(tokio::spawn(slowdown_monitor_worker(
			slowdown_monitor,
			config.slowdown_check_interval(),
			shutdown_rx,
		)))
	} else {
		info!(
			"Payment slowdown simulation disabled: event=slowdown_feature_status \
			 status=disabled"
		);
		None
	};

	let result = server.await;

	if let Some(worker) = worker {
		let _ = stop_slowdown_monitor_worker(&shutdown_tx, worker).await;
	}

	result
}
