use std::time::Duration;

use derive_more::derive::Display;
use uuid::Uuid;

pub const DEFAULT_FAILURE_RATE: f64 = 0.05;
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSettings {
	/// Probability that a payment is declined.
	pub failure_rate:     f64,
	/// Baseline latency added to every payment.
	pub processing_delay: Duration,
}

impl Default for PaymentSettings {
	fn default() -> Self {
		Self {
			failure_rate:     DEFAULT_FAILURE_RATE,
			processing_delay: DEFAULT_PROCESSING_DELAY,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeclineReason {
	#[display("Insufficient funds")]
	InsufficientFunds,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
	Approved { transaction_id: Uuid, amount: f64 },
	Declined { reason: DeclineReason },
}

impl PaymentOutcome {
	pub fn approved(amount: f64) -> Self {
		PaymentOutcome::Approved {
			transaction_id: Uuid::new_v4(),
			amount,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, PaymentOutcome::Approved { .. })
	}

	pub fn transaction_id(&self) -> Option<Uuid> {
		match self {
			PaymentOutcome::Approved { transaction_id, .. } => Some(*transaction_id),
			PaymentOutcome::Declined { .. } => None,
		}
	}

	pub fn reason(&self) -> Option<DeclineReason> {
		match self {
			PaymentOutcome::Approved { .. } => None,
			PaymentOutcome::Declined { reason } => Some(*reason),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_approved_carries_id_and_no_reason() {
		let outcome = PaymentOutcome::approved(4.50);

		assert!(outcome.is_success());
		assert!(outcome.transaction_id().is_some());
		assert!(outcome.reason().is_none());
	}

	#[test]
	fn test_declined_carries_reason_and_no_id() {
		let outcome = PaymentOutcome::Declined {
			reason: DeclineReason::InsufficientFunds,
		};

		assert!(!outcome.is_success());
		assert!(outcome.transaction_id().is_none());
		assert_eq!(
			outcome.reason().map(|r| r.to_string()),
			Some("Insufficient funds".to_string())
		);
	}

	#[test]
	fn test_default_settings() {
		let settings = PaymentSettings::default();
		assert_eq!(settings.failure_rate, 0.05);
		assert_eq!(settings.processing_delay, Duration::from_millis(500));
	}
}
