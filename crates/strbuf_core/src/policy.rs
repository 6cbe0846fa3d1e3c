//! Capacity growth configuration.

/// Default smallest allocation made when a buffer first grows.
pub const DEFAULT_MIN_CAPACITY: usize = 16;

/// Default multiplier applied to the current capacity on growth.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Controls how much storage a [`Buffer`](crate::Buffer) requests when it
/// runs out of room.
///
/// On growth the new capacity is
/// `max(required, factor * current, min_capacity)`. A factor of at least 2
/// keeps appends amortized O(1): N pushes perform O(log N) reallocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Smallest capacity allocated by an amortized growth step.
    pub min_capacity: usize,

    /// Multiplier applied to the current capacity. Values below 2 are
    /// treated as 2.
    pub factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Creates a policy with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum capacity of an amortized growth step.
    #[must_use]
    pub const fn min_capacity(mut self, value: usize) -> Self {
        self.min_capacity = value;
        self
    }

    /// Sets the growth multiplier.
    #[must_use]
    pub const fn factor(mut self, value: usize) -> Self {
        self.factor = if value < 2 { 2 } else { value };
        self
    }

    /// Computes the capacity to allocate when `required` bytes must fit and
    /// `current` bytes are allocated.
    #[must_use]
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        let factor = self.factor.max(2);
        required
            .max(current.saturating_mul(factor))
            .max(self.min_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.min_capacity, 16);
        assert_eq!(policy.factor, 2);
    }

    #[test]
    fn builder_pattern() {
        let policy = GrowthPolicy::new().min_capacity(4).factor(3);
        assert_eq!(policy.min_capacity, 4);
        assert_eq!(policy.factor, 3);
    }

    #[test]
    fn factor_below_two_is_raised() {
        assert_eq!(GrowthPolicy::new().factor(1).factor, 2);
        assert_eq!(GrowthPolicy::new().factor(0).factor, 2);

        // A hand-built policy with a bad factor still doubles.
        let policy = GrowthPolicy {
            min_capacity: 0,
            factor: 1,
        };
        assert_eq!(policy.next_capacity(10, 11), 20);
    }

    #[test]
    fn next_capacity_takes_largest_bound() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0, 2), 16);
        assert_eq!(policy.next_capacity(16, 17), 32);
        assert_eq!(policy.next_capacity(16, 100), 100);
    }

    #[test]
    fn next_capacity_saturates() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(usize::MAX / 2 + 1, 1), usize::MAX);
    }
}
