//! Property tests for the severity domain.

use proptest::prelude::*;

use nagret::{severity_label, validate_code, CheckResult, NagretError};

proptest! {
    /// PROPERTY: only 0, 1 and 2 map to a label.
    #[test]
    fn property_label_domain(code in any::<i64>()) {
        match code {
            0 => prop_assert_eq!(severity_label(code).unwrap(), "OK"),
            1 => prop_assert_eq!(severity_label(code).unwrap(), "WARNING"),
            2 => prop_assert_eq!(severity_label(code).unwrap(), "CRITICAL"),
            _ => prop_assert!(matches!(
                severity_label(code),
                Err(NagretError::SeverityMapping { .. })
            ), "expected SeverityMapping error"),
        }
    }

    /// PROPERTY: construction agrees with validation.
    #[test]
    fn property_construction_matches_validation(code in -10i64..10) {
        let built = CheckResult::new(code, "check");
        prop_assert_eq!(built.is_ok(), validate_code(Some(code)).is_ok());
    }
}
