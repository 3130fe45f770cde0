//! Property tests for performance field construction and parsing.

use proptest::prelude::*;

use nagret::{NagretError, PerfField};

const UNITS: [&str; 11] = ["", "s", "ms", "us", "%", "B", "KB", "MB", "GB", "TB", "c"];

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_/][A-Za-z0-9_/ .-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every allowed unit appears in the fragment unchanged.
    #[test]
    fn property_allowed_unit_renders_unchanged(
        label in label(),
        value in 0u32..100_000,
        unit in proptest::sample::select(UNITS.to_vec()),
    ) {
        let field = PerfField::new(label.clone(), value).unwrap().with_unit(unit).unwrap();
        prop_assert_eq!(field.render(), format!("'{label}'={value}{unit};;;;"));
    }

    /// PROPERTY: any other unit string is rejected.
    #[test]
    fn property_unknown_unit_rejected(
        unit in "[A-Za-z%]{1,4}".prop_filter("not allowed", |u| !UNITS.contains(&u.as_str())),
    ) {
        let err = PerfField::new("x", 1).unwrap().with_unit(&unit).unwrap_err();
        prop_assert!(matches!(err, NagretError::UnitValidation { .. }), "expected UnitValidation error");
    }

    /// PROPERTY: a fragment always carries exactly four ';' separators
    /// when thresholds contain none themselves.
    #[test]
    fn property_fragment_has_four_slots(
        label in label(),
        warn in "[0-9:~@.]{0,6}",
        crit in "[0-9:~@.]{0,6}",
        min in "[0-9.]{0,4}",
        max in "[0-9.]{0,4}",
    ) {
        let field = PerfField::new(label, 1)
            .unwrap()
            .with_warn(warn)
            .with_crit(crit)
            .with_min(min)
            .with_max(max);
        prop_assert_eq!(field.render().matches(';').count(), 4);
    }

    /// PROPERTY: rendered fields parse back to the same fragment.
    #[test]
    fn property_parse_accepts_rendered_fragment(
        label in "[A-Za-z_/][A-Za-z0-9_/.-]{0,16}",
        value in 0u32..100_000,
        unit in proptest::sample::select(UNITS.to_vec()),
        warn in "[0-9]{0,3}",
        crit in "[0-9]{0,3}",
    ) {
        let field = PerfField::new(label, value)
            .unwrap()
            .with_unit(unit)
            .unwrap()
            .with_warn(warn)
            .with_crit(crit);
        let parsed: PerfField = field.render().parse().unwrap();
        prop_assert_eq!(parsed.render(), field.render());
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(spec in "(?s).{0,128}") {
        let _ = spec.parse::<PerfField>();
    }
}
