use std::sync::Arc;
use std::time::Duration;

use payment_simulator::domain::payment::PaymentSettings;
use payment_simulator::domain::random::RandomSource;
use payment_simulator::domain::slowdown::{SlowdownPolicy, SlowdownState};
use payment_simulator::infrastructure::slowdown::slowdown_monitor::SlowdownMonitor;
use payment_simulator::use_cases::process_payment::ProcessPaymentUseCase;

/// Always draws the same point: `unit` in `[0, 1)`, and the matching
/// fraction of any requested range.
pub struct FixedRandomSource {
	unit: f64,
}

impl FixedRandomSource {
	pub fn new(unit: f64) -> Self {
		Self { unit }
	}

	/// Draw that always falls below the default failure rate.
	pub fn declining() -> Self {
		Self::new(0.01)
	}

	/// Draw that always clears the default failure rate.
	pub fn approving() -> Self {
		Self::new(0.99)
	}
}

impl RandomSource for FixedRandomSource {
	fn next_unit(&self) -> f64 {
		self.unit
	}

	fn next_in_range(&self, low: f64, high: f64) -> f64 {
		low + (high - low) * self.unit
	}
}

pub fn use_case_with(
	random: Arc<dyn RandomSource>,
	state: SlowdownState,
	processing_delay: Duration,
) -> ProcessPaymentUseCase {
	let monitor =
		SlowdownMonitor::with_state(state, SlowdownPolicy::default(), random.clone());
	let settings = PaymentSettings {
		processing_delay,
		..PaymentSettings::default()
	};

	ProcessPaymentUseCase::new(monitor, random, settings)
}
