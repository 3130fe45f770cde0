//! Property tests for rendering check results.

use proptest::prelude::*;

use nagret::{CheckResult, PerfField};

fn message() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 :/%()-]{1,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering twice gives the same message and code.
    #[test]
    fn property_render_is_idempotent(
        code in 0i64..=2,
        message in message(),
        values in proptest::collection::vec(0u32..1000, 0..6),
        lines in proptest::collection::vec(message(), 0..4),
    ) {
        let mut result = CheckResult::new(code, message).unwrap();
        for (i, value) in values.iter().enumerate() {
            result.add_field(PerfField::new(format!("f{i}"), value).unwrap());
        }
        for line in lines {
            result.add_line(line);
        }

        let first = result.render().unwrap();
        let second = result.render().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(i64::from(first.exit_code()), code);
    }

    /// PROPERTY: the trailer lists fields in insertion order after `|`.
    #[test]
    fn property_trailer_preserves_order(values in proptest::collection::vec(0u32..1000, 0..8)) {
        let mut result = CheckResult::new(0, "ok").unwrap();
        let mut expected = String::from("|");
        for (i, value) in values.iter().enumerate() {
            result.add_field(PerfField::new(format!("f{i}"), value).unwrap());
            expected.push_str(&format!(" 'f{i}'={value};;;;"));
        }
        prop_assert_eq!(result.perf_trailer().unwrap(), expected);
    }

    /// PROPERTY: the message is the label, the text, the lines, then the trailer.
    #[test]
    fn property_message_layout(code in 0i64..=2, message in message()) {
        let output = CheckResult::new(code, message.clone()).unwrap().render().unwrap();
        let expected = format!("{} {}  ; |", output.severity.as_str(), message);
        prop_assert_eq!(output.message, expected);
    }
}
