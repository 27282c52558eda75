use std::sync::Arc;

use derive_more::derive::{Display, Error};
use log::{info, warn};
use tokio::time::sleep;

use crate::domain::payment::{DeclineReason, PaymentOutcome, PaymentSettings};
use crate::domain::random::RandomSource;
use crate::infrastructure::slowdown::slowdown_monitor::{
	SlowdownError, SlowdownMonitor,
};
use crate::use_cases::dto::ProcessPaymentCommand;

#[derive(Debug, Display, Error, PartialEq)]
pub enum ProcessPaymentError {
	#[display("Amount must be a positive number, got {amount}")]
	InvalidAmount { amount: f64 },
	#[display("Service error: {_0}")]
	Slowdown(SlowdownError),
}

impl From<SlowdownError> for ProcessPaymentError {
	fn from(err: SlowdownError) -> Self {
		ProcessPaymentError::Slowdown(err)
	}
}

/// Simulated authorization: slowdown latency, base latency, then a
/// random decline draw.
#[derive(Clone)]
pub struct ProcessPaymentUseCase {
	slowdown: SlowdownMonitor,
	random:   Arc<dyn RandomSource>,
	settings: PaymentSettings,
}

impl ProcessPaymentUseCase {
	pub fn new(
		slowdown: SlowdownMonitor,
		random: Arc<dyn RandomSource>,
		settings: PaymentSettings,
	) -> Self {
		Self {
			slowdown,
			random,
			settings,
		}
	}

	pub async fn execute(
		&self,
		command: ProcessPaymentCommand,
	) -> Result<PaymentOutcome, ProcessPaymentError> {
		if !command.amount.is_finite() || command.amount <= 0.0 {
			return Err(ProcessPaymentError::InvalidAmount {
				amount: command.amount,
			});
		}

		let slowdown_delay = self.slowdown.current_delay().await?;

		if !slowdown_delay.is_zero() {
			info!(
				"Adding slowdown delay to payment processing: \
				 event=slowdown_delay_applied delay_seconds={:.3} customer_name={}",
				slowdown_delay.as_secs_f64(),
				command.customer_name
			);
			sleep(slowdown_delay).await;
		}

		sleep(self.settings.processing_delay).await;

		if self.random.next_unit() < self.settings.failure_rate {
			warn!(
				"Payment simulation failed: customer_name={} amount={}",
				command.customer_name, command.amount
			);
			return Ok(PaymentOutcome::Declined {
				reason: DeclineReason::InsufficientFunds,
			});
		}

		let outcome = PaymentOutcome::approved(command.amount);
		if let Some(transaction_id) = outcome.transaction_id() {
			info!(
				"Payment processed successfully: customer_name={} amount={} \
				 transaction_id={}",
				command.customer_name, command.amount, transaction_id
			);
		}

		Ok(outcome)
	}
}
