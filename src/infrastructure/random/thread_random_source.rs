use rand::Rng;

use crate::domain::random::RandomSource;

/// [`RandomSource`] backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
	pub fn new() -> Self {
		Self
	}
}

impl RandomSource for ThreadRandomSource {
	fn next_unit(&self) -> f64 {
		rand::thread_rng().gen_range(0.0..1.0)
	}

	fn next_in_range(&self, low: f64, high: f64) -> f64 {
		if high <= low {
			return low;
		}
		rand::thread_rng().gen_range(low..=high)
	}
}
