//! Property-based tests for the accumulator laws

use fieldcheck::{FieldValidator, ValidationError, Validator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_passing_rules_record_nothing(
        n in any::<i64>(),
        text in "[a-z]{1,20}",
    ) {
        let mut v = Validator::new();
        v.max(n, n, "max", None);
        v.range(n, n, n, "range", None);
        v.required_string(&text, "text", None);
        v.max_char(&text, text.chars().count(), "text", None);
        v.confirm(&text, &text, "confirm", None);
        v.in_string(&text, &[text.as_str()], "in", None);

        prop_assert!(!v.has_error());
        prop_assert!(v.messages().is_empty());
    }

    #[test]
    fn prop_min_and_max_partition_every_value(value in any::<i32>(), n in any::<i32>()) {
        let mut min = Validator::new();
        min.min(value, n, "v", None);
        let mut max = Validator::new();
        max.max(value, n, "v", None);

        // exactly one of "value > n" and "value <= n" holds
        prop_assert_ne!(min.has_error(), max.has_error());
    }

    #[test]
    fn prop_has_error_iff_failures_recorded(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut v = Validator::new();
        for (i, flag) in flags.iter().enumerate() {
            v.required_bool(*flag, &format!("f{}", i), None);
        }

        let failures = flags.iter().filter(|f| !**f).count();
        prop_assert_eq!(v.len(), failures);
        prop_assert_eq!(v.has_error(), failures > 0);
        prop_assert_eq!(v.messages().len(), failures);
    }

    #[test]
    fn prop_messages_is_idempotent(names in prop::collection::vec("[a-c]{0,2}", 0..10)) {
        let mut v = Validator::new();
        for name in &names {
            v.required_string("", name, None);
        }

        prop_assert_eq!(v.messages(), v.messages());
    }

    #[test]
    fn prop_later_message_wins_first_error_kept(
        first in "[a-z]{1,10}",
        second in "[a-z]{1,10}",
    ) {
        let mut v = Validator::new();
        v.add_error("x", ValidationError::new(first.clone()));
        v.add_error("x", ValidationError::new(second.clone()));

        prop_assert_eq!(v.messages()["x"].clone(), second);
        prop_assert_eq!(v.get_error(), Some(ValidationError::new(first)));
    }

    #[test]
    fn prop_char_rules_count_code_points(text in "\\PC{0,16}", n in 0usize..20) {
        let count = text.chars().count();

        let mut min = Validator::new();
        min.min_char(&text, n, "t", None);
        prop_assert_eq!(min.has_error(), count <= n);

        let mut max = Validator::new();
        max.max_char(&text, n, "t", None);
        prop_assert_eq!(max.has_error(), count > n);
    }
}
