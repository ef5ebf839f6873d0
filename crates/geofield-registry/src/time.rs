//! The run-time clock.

use geofield_core::TimeIndex;

/// Simulation clock: a time value and the index of the current step.
///
/// The index starts at [`TimeIndex::ZERO`] and increases by one per
/// [`advance`](Self::advance). It is the value fields are stamped with
/// and cached results are compared against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunTime {
    value: f64,
    index: TimeIndex,
}

impl RunTime {
    /// A clock at time `start`, index zero.
    pub fn new(start: f64) -> Self {
        Self {
            value: start,
            index: TimeIndex::ZERO,
        }
    }

    /// Current time value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current time index.
    pub fn time_index(&self) -> TimeIndex {
        self.index
    }

    /// Move forward by `dt` and one index, returning the new index.
    pub fn advance(&mut self, dt: f64) -> TimeIndex {
        self.value += dt;
        self.index = self.index.next();
        self.index
    }

    /// Jump to an explicit time and index, e.g. when restarting.
    pub fn set(&mut self, value: f64, index: TimeIndex) {
        self.value = value;
        self.index = index;
    }
}

impl Default for RunTime {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advance_bumps_index_and_value() {
        let mut t = RunTime::new(1.0);
        assert_eq!(t.advance(0.5), TimeIndex(1));
        assert_eq!(t.advance(0.5), TimeIndex(2));
        assert!((t.value() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn set_jumps() {
        let mut t = RunTime::default();
        t.set(3.0, TimeIndex(30));
        assert_eq!(t.time_index(), TimeIndex(30));
        assert_eq!(t.value(), 3.0);
    }

    proptest! {
        #[test]
        fn index_counts_advances(steps in 0u64..200, dt in 1e-6f64..1.0) {
            let mut t = RunTime::default();
            for _ in 0..steps {
                t.advance(dt);
            }
            prop_assert_eq!(t.time_index(), TimeIndex(steps));
            prop_assert!(t.value() >= 0.0);
        }
    }
}
