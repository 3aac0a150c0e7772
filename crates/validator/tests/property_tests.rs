//! Property-based tests for tranzo-validator.

use proptest::prelude::*;
use tranzo_validator::prelude::*;

// ============================================================================
// PURITY: is_satisfied(x) == is_satisfied(x)
// ============================================================================

proptest! {
    #[test]
    fn required_is_pure(s in ".*") {
        let value = Value::from(s);
        prop_assert_eq!(required().is_satisfied(&value), required().is_satisfied(&value));
    }

    #[test]
    fn email_is_pure(s in ".*") {
        let check = email();
        let value = Value::from(s);
        prop_assert_eq!(check.is_satisfied(&value), check.is_satisfied(&value));
    }

    #[test]
    fn range_agrees_with_bounds(n in any::<i64>(), lo in -1000i64..1000, span in 0i64..1000) {
        let hi = lo + span;
        let value = Value::Int(n);
        prop_assert_eq!(
            range(lo, hi).is_satisfied(&value),
            min(lo).is_satisfied(&value) && max(hi).is_satisfied(&value)
        );
    }

    #[test]
    fn required_matches_trimmed_emptiness(s in "[ a-z]{0,8}") {
        prop_assert_eq!(required().is_satisfied(&Value::from(s.as_str())), !s.trim().is_empty());
    }
}

// ============================================================================
// ACCUMULATION: one error per failing call, first message per key in the map
// ============================================================================

proptest! {
    #[test]
    fn each_failure_is_recorded_once(ages in prop::collection::vec(-50i64..50, 0..20)) {
        let mut v = Validation::new();
        for age in &ages {
            v.min(*age, 0).key("age");
        }
        let failures = ages.iter().filter(|age| **age < 0).count();
        prop_assert_eq!(v.errors().len(), failures);
        prop_assert_eq!(v.has_errors(), failures > 0);
        prop_assert_eq!(v.error_map().len(), usize::from(failures > 0));
    }

    #[test]
    fn error_map_keeps_first_message(messages in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let mut v = Validation::new();
        for message in &messages {
            v.error(message).key("field");
        }
        let map = v.error_map();
        prop_assert_eq!(map["field"].as_str(), messages[0].as_str());
    }
}
