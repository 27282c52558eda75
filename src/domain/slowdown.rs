use std::time::Duration;

use tokio::time::Instant;

use crate::domain::random::RandomSource;

pub const DEFAULT_SLOWDOWN_INTERVAL: Duration = Duration::from_secs(900);
pub const DEFAULT_SLOWDOWN_DURATION: Duration = Duration::from_secs(300);
pub const DEFAULT_SLOWDOWN_MIN_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_SLOWDOWN_MAX_DELAY: Duration = Duration::from_secs(5);

/// Timing of the recurring slow periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowdownPolicy {
	/// Gap between the end of one slow period and the start of the next.
	pub interval:  Duration,
	pub duration:  Duration,
	pub min_delay: Duration,
	pub max_delay: Duration,
}

impl Default for SlowdownPolicy {
	fn default() -> Self {
		Self {
			interval:  DEFAULT_SLOWDOWN_INTERVAL,
			duration:  DEFAULT_SLOWDOWN_DURATION,
			min_delay: DEFAULT_SLOWDOWN_MIN_DELAY,
			max_delay: DEFAULT_SLOWDOWN_MAX_DELAY,
		}
	}
}

impl SlowdownPolicy {
	/// Extra latency a request observes in `state`. Only a slow period
	/// produces a non-zero delay.
	pub fn delay_for(
		&self,
		state: &SlowdownState,
		random: &dyn RandomSource,
	) -> Duration {
		if !state.is_active() {
			return Duration::ZERO;
		}

		let low = self.min_delay.as_secs_f64();
		let high = self.max_delay.as_secs_f64();
		let drawn = random.next_in_range(low, high).clamp(low, high);

		Duration::from_secs_f64(drawn)
	}
}

/// Operating mode of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlowdownState {
	Disabled,
	Normal { next_slowdown_at: Instant },
	Slow { started_at: Instant },
}

/// A change of mode produced by [`SlowdownState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlowdownTransition {
	Started { at: Instant, expected_end: Instant },
	Ended { at: Instant, next_slowdown_at: Instant },
}

impl SlowdownState {
	/// State at process start. An enabled simulator is due for its first
	/// slow period immediately.
	pub fn initial(enabled: bool, now: Instant) -> Self {
		if enabled {
			SlowdownState::Normal {
				next_slowdown_at: now,
			}
		} else {
			SlowdownState::Disabled
		}
	}

	pub fn is_enabled(&self) -> bool {
		!matches!(self, SlowdownState::Disabled)
	}

	pub fn is_active(&self) -> bool {
		matches!(self, SlowdownState::Slow { .. })
	}

	pub fn slowdown_started_at(&self) -> Option<Instant> {
		match self {
			SlowdownState::Slow { started_at } => Some(*started_at),
			_ => None,
		}
	}

	pub fn next_slowdown_at(&self) -> Option<Instant> {
		match self {
			SlowdownState::Normal { next_slowdown_at } => Some(*next_slowdown_at),
			_ => None,
		}
	}

	/// Applies at most one transition for the instant `now`.
	pub fn advance(
		self,
		policy: &SlowdownPolicy,
		now: Instant,
	) -> (SlowdownState, Option<SlowdownTransition>) {
		match self {
			SlowdownState::Disabled => (self, None),
			SlowdownState::Normal { next_slowdown_at } if now >= next_slowdown_at => (
				SlowdownState::Slow { started_at: now },
				Some(SlowdownTransition::Started {
					at:           now,
					expected_end: now + policy.duration,
				}),
			),
			SlowdownState::Slow { started_at }
				if now.duration_since(started_at) >= policy.duration =>
			{
				let next_slowdown_at = now + policy.interval;
				(
					SlowdownState::Normal { next_slowdown_at },
					Some(SlowdownTransition::Ended {
						at: now,
						next_slowdown_at,
					}),
				)
			}
			_ => (self, None),
		}
	}
}
