//! Interval arithmetic for ray parameter ranges.
//!
//! A closed interval [min, max] restricts which t-values count as hits and
//! backs the color clamp at output time.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Empty interval (contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Interval containing every real number.
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a new interval with given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds).
    ///
    /// This is the membership test for hit acceptance: roots landing exactly
    /// on a bound are rejected.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to the interval's bounds.
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_excludes_the_bounds() {
        let i = Interval::new(0.0, 2.0);
        assert!(i.surrounds(1.0));
        assert!(!i.surrounds(0.0));
        assert!(!i.surrounds(2.0));
        assert!(i.contains(0.0));
        assert!(i.contains(2.0));
    }

    #[test]
    fn empty_and_universe() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(f64::MAX));
        assert!(Interval::EMPTY.size() < 0.0);
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(1.2), 0.999);
        assert_eq!(i.clamp(-0.1), 0.0);
        assert_eq!(i.clamp(0.5), 0.5);
    }
}
