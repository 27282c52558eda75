use std::sync::Arc;
use std::time::Duration;

use derive_more::derive::{Display, Error};
use log::info;
use time::OffsetDateTime;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::{Instant, timeout};

use crate::domain::random::RandomSource;
use crate::domain::slowdown::{SlowdownPolicy, SlowdownState, SlowdownTransition};

/// Upper bound on waiting for the shared state.
pub const STATE_LOCK_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum SlowdownError {
	#[display("Slowdown state could not be acquired in time.")]
	StateUnavailable,
}

/// Process-wide slowdown state behind a single mutex.
///
/// Request handlers ([`SlowdownMonitor::current_delay`]) and the background
/// worker ([`SlowdownMonitor::refresh`]) apply the same transition under the
/// same lock. The guard is never held across the simulated latency.
#[derive(Clone)]
pub struct SlowdownMonitor {
	state:        Arc<Mutex<SlowdownState>>,
	policy:       SlowdownPolicy,
	random:       Arc<dyn RandomSource>,
	lock_timeout: Duration,
}

impl SlowdownMonitor {
	pub fn new(
		enabled: bool,
		policy: SlowdownPolicy,
		random: Arc<dyn RandomSource>,
	) -> Self {
		Self::with_state(
			SlowdownState::initial(enabled, Instant::now()),
			policy,
			random,
		)
	}

	pub fn with_state(
		state: SlowdownState,
		policy: SlowdownPolicy,
		random: Arc<dyn RandomSource>,
	) -> Self {
		Self {
			state: Arc::new(Mutex::new(state)),
			policy,
			random,
			lock_timeout: STATE_LOCK_TIMEOUT,
		}
	}

	pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
		self.lock_timeout = lock_timeout;
		self
	}

	pub fn policy(&self) -> &SlowdownPolicy {
		&self.policy
	}

	pub async fn snapshot(&self) -> Result<SlowdownState, SlowdownError> {
		Ok(*self.lock().await?)
	}

	/// Re-evaluates the state machine without drawing a delay.
	pub async fn refresh(
		&self,
	) -> Result<Option<SlowdownTransition>, SlowdownError> {
		let mut state = self.lock().await?;
		Ok(self.advance(&mut state))
	}

	/// Brings the state up to date and draws the extra latency for one
	/// request, as a single critical section.
	pub async fn current_delay(&self) -> Result<Duration, SlowdownError> {
		let mut state = self.lock().await?;
		self.advance(&mut state);
		Ok(self.policy.delay_for(&state, self.random.as_ref()))
	}

	async fn lock(&self) -> Result<MutexGuard<'_, SlowdownState>, SlowdownError> {
		timeout(self.lock_timeout, self.state.lock())
			.await
			.map_err(|_| SlowdownError::StateUnavailable)
	}

	fn advance(&self, state: &mut SlowdownState) -> Option<SlowdownTransition> {
		let (next, transition) = state.advance(&self.policy, Instant::now());
		*state = next;

		if let Some(transition) = transition {
			log_transition(&transition);
		}

		transition
	}
}

fn log_transition(transition: &SlowdownTransition) {
	let wall_now = OffsetDateTime::now_utc();

	match transition {
		SlowdownTransition::Started { at, expected_end } => {
			let duration = expected_end.duration_since(*at);
			info!(
				"Payment slowdown period started: event=slowdown_started \
				 duration_seconds={} expected_end_time={}",
				duration.as_secs(),
				(wall_now + duration).unix_timestamp()
			);
		}
		SlowdownTransition::Ended {
			at,
			next_slowdown_at,
		} => {
			let until_next = next_slowdown_at.duration_since(*at);
			info!(
				"Payment slowdown period ended: event=slowdown_ended \
				 next_slowdown_time={}",
				(wall_now + until_next).unix_timestamp()
			);
		}
	}
}
