//! Slot capacity with an unbounded mode

use serde::{Deserialize, Serialize};

/// Effective slot limit of a container
///
/// `Unbounded` is the quiver-like mode: the container accepts any number of
/// items and reports the `u32::MAX` sentinel wherever a numeric capacity is
/// expected. Callers summing capacities across nested containers must use
/// saturating arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    /// Fixed number of slots
    Bounded(u32),
    /// No slot limit
    Unbounded,
}

impl Capacity {
    /// Sentinel reported as the numeric capacity of unbounded containers
    pub const UNBOUNDED_SENTINEL: u32 = u32::MAX;

    /// Numeric capacity; `u32::MAX` for unbounded
    #[inline]
    pub const fn effective(&self) -> u32 {
        match self {
            Self::Bounded(limit) => *limit,
            Self::Unbounded => Self::UNBOUNDED_SENTINEL,
        }
    }

    /// Slots still free given the current occupancy
    ///
    /// Saturates at zero for bounded capacities (occupancy can exceed the
    /// limit after privileged inserts) and reports the sentinel for
    /// unbounded ones.
    #[inline]
    pub const fn remaining(&self, used: u32) -> u32 {
        match self {
            Self::Bounded(limit) => limit.saturating_sub(used),
            Self::Unbounded => Self::UNBOUNDED_SENTINEL,
        }
    }

    /// Check whether this capacity is unbounded
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        let cap = Capacity::Bounded(20);
        assert_eq!(cap.effective(), 20);
        assert_eq!(cap.remaining(0), 20);
        assert_eq!(cap.remaining(19), 1);
        assert_eq!(cap.remaining(20), 0);
        assert!(!cap.is_unbounded());
    }

    #[test]
    fn test_bounded_over_occupancy_saturates() {
        // Privileged inserts can push occupancy past the limit
        let cap = Capacity::Bounded(8);
        assert_eq!(cap.remaining(9), 0);
    }

    #[test]
    fn test_unbounded() {
        let cap = Capacity::Unbounded;
        assert_eq!(cap.effective(), u32::MAX);
        assert_eq!(cap.remaining(1_000_000), u32::MAX);
        assert!(cap.is_unbounded());
    }
}
