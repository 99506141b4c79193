/// A closed range of real values, used for ray parameter bounds and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Same interval with the upper bound replaced.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.001, f64::INFINITY);

        // Endpoints are excluded
        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(-1.5));

        assert!(interval.surrounds(0.5));
        assert!(interval.surrounds(1e9));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 0.999);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.5), 0.5);
        assert_eq!(interval.clamp(1.0), 0.999);
        assert_eq!(interval.clamp(42.0), 0.999);
    }

    #[test]
    fn test_interval_with_max() {
        let interval = Interval::new(0.001, f64::INFINITY).with_max(3.0);
        assert_eq!(interval.min, 0.001);
        assert_eq!(interval.max, 3.0);
    }
}
