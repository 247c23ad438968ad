//! Interval arithmetic for ray parameter ranges.
//!
//! Provides closed intervals [min, max] used for ray t-values and as the axis
//! ranges of bounding boxes.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Create the tightest interval enclosing both input intervals
    pub fn enclosing(a: Interval, b: Interval) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Calculate the size (width) of the interval
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Grow the interval by delta, split evenly between both ends
    pub fn expand(&self, delta: f32) -> Self {
        let padding = delta / 2.0;
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }
}

/// Commonly used interval constants
impl Interval {
    /// Empty interval constant (min > max, contains nothing)
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Universe interval constant (contains all real numbers)
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_is_exclusive_contains_is_inclusive() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.surrounds(0.0));
        assert!(!i.surrounds(1.0));
        assert!(i.surrounds(0.5));
        assert!(!i.surrounds(-0.1));
        assert!(!i.surrounds(1.1));
    }

    #[test]
    fn empty_contains_nothing() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(1e30));
    }

    #[test]
    fn enclosing_covers_both_inputs() {
        let a = Interval::new(-1.0, 0.5);
        let b = Interval::new(0.0, 2.0);
        let u = Interval::enclosing(a, b);
        assert_eq!(u.min, -1.0);
        assert_eq!(u.max, 2.0);
    }

    #[test]
    fn expand_pads_both_ends() {
        let i = Interval::new(1.0, 2.0).expand(0.2);
        assert!((i.min - 0.9).abs() < 1e-6);
        assert!((i.max - 2.1).abs() < 1e-6);
        assert!((i.size() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn clamp_limits_to_bounds() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(-0.5), 0.0);
        assert_eq!(i.clamp(0.5), 0.5);
        assert_eq!(i.clamp(2.0), 0.999);
    }
}
