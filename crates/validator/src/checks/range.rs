//! Numeric range checks
//!
//! Integer checks only accept [`Value::Int`] and float checks only accept
//! [`Value::Float`]; any other variant is not satisfied.

use crate::foundation::Value;

crate::check! {
    /// Validates that an integer is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min { min: i64 };
    satisfied(self, value) { matches!(value, Value::Int(n) if *n >= self.min) }
    message(self) { format!("Minimum is {}", self.min) }
    fn min(min: i64);
}

crate::check! {
    /// Validates that an integer does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max { max: i64 };
    satisfied(self, value) { matches!(value, Value::Int(n) if *n <= self.max) }
    message(self) { format!("Maximum is {}", self.max) }
    fn max(max: i64);
}

crate::check! {
    /// Validates that a float is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub MinFloat { min: f64 };
    satisfied(self, value) { matches!(value, Value::Float(n) if *n >= self.min) }
    message(self) { format!("Minimum is {}", self.min) }
    fn min_float(min: f64);
}

crate::check! {
    /// Validates that a float does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub MaxFloat { max: f64 };
    satisfied(self, value) { matches!(value, Value::Float(n) if *n <= self.max) }
    message(self) { format!("Maximum is {}", self.max) }
    fn max_float(max: f64);
}

crate::check! {
    /// Validates that an integer is within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tranzo_validator::checks::range;
    /// use tranzo_validator::foundation::{Check, Value};
    ///
    /// let check = range(1, 10);
    /// assert!(check.is_satisfied(&Value::Int(1)));
    /// assert!(check.is_satisfied(&Value::Int(10)));
    /// assert!(!check.is_satisfied(&Value::Int(0)));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Range { min: Min, max: Max };
    satisfied(self, value) {
        matches!(value, Value::Int(n) if (self.min.min..=self.max.max).contains(n))
    }
    message(self) { format!("Range is {} to {}", self.min.min, self.max.max) }
    new(min: i64, max: i64) { Self { min: Min::new(min), max: Max::new(max) } }
    fn range(min: i64, max: i64);
}

crate::check! {
    /// Validates that a float is within an inclusive range.
    #[derive(Copy, PartialEq)]
    pub RangeFloat { min: MinFloat, max: MaxFloat };
    satisfied(self, value) {
        matches!(value, Value::Float(n) if (self.min.min..=self.max.max).contains(n))
    }
    message(self) { format!("Range is {} to {}", self.min.min, self.max.max) }
    new(min: f64, max: f64) { Self { min: MinFloat::new(min), max: MaxFloat::new(max) } }
    fn range_float(min: f64, max: f64);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Check;
    use rstest::rstest;

    #[test]
    fn test_min() {
        let check = min(5);
        assert!(check.is_satisfied(&Value::Int(5)));
        assert!(check.is_satisfied(&Value::Int(10)));
        assert!(!check.is_satisfied(&Value::Int(3)));
        assert_eq!(check.default_message(), "Minimum is 5");
    }

    #[test]
    fn test_max() {
        let check = max(10);
        assert!(check.is_satisfied(&Value::Int(5)));
        assert!(check.is_satisfied(&Value::Int(10)));
        assert!(!check.is_satisfied(&Value::Int(15)));
        assert_eq!(check.default_message(), "Maximum is 10");
    }

    #[rstest]
    #[case(5, true)]
    #[case(0, false)]
    #[case(1, true)]
    #[case(10, true)]
    #[case(11, false)]
    fn test_range(#[case] n: i64, #[case] expected: bool) {
        assert_eq!(range(1, 10).is_satisfied(&Value::Int(n)), expected);
    }

    #[test]
    fn test_range_message() {
        assert_eq!(range(1, 10).default_message(), "Range is 1 to 10");
    }

    #[test]
    fn test_float_bounds() {
        assert!(min_float(18.0).is_satisfied(&Value::Float(18.5)));
        assert!(!min_float(18.0).is_satisfied(&Value::Float(17.9)));
        assert!(max_float(100.0).is_satisfied(&Value::Float(99.9)));
        assert!(!max_float(100.0).is_satisfied(&Value::Float(100.1)));
        assert!(range_float(0.5, 1.5).is_satisfied(&Value::Float(1.5)));
        assert_eq!(range_float(0.5, 1.5).default_message(), "Range is 0.5 to 1.5");
        assert_eq!(min_float(2.0).default_message(), "Minimum is 2");
    }

    #[test]
    fn wrong_variant_is_not_satisfied() {
        assert!(!min(0).is_satisfied(&Value::Float(3.0)));
        assert!(!max(10).is_satisfied(&Value::from("3")));
        assert!(!min_float(0.0).is_satisfied(&Value::Int(3)));
        assert!(!range(1, 10).is_satisfied(&Value::Absent));
    }
}
