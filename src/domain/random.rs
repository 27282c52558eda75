/// Source of the random draws behind declines and slowdown delays.
pub trait RandomSource: Send + Sync + 'static {
	/// Uniform draw in `[0, 1)`.
	fn next_unit(&self) -> f64;

	/// Uniform draw in `[low, high]`.
	fn next_in_range(&self, low: f64, high: f64) -> f64;
}
