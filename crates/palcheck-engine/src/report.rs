//! Check results and the fixed user-facing messages

use serde::{Serialize, Serializer};

use palcheck_utils::types::{IntWidth, OverflowPolicy};

/// Schema identifier carried in every JSON report.
pub const REPORT_SCHEMA_VERSION: &str = "palcheck-result.v1";

/// Schema identifier carried in JSON error bodies.
pub const ERROR_SCHEMA_VERSION: &str = "palcheck-error.v1";

/// Prompt written before reading input. No trailing newline.
pub const PROMPT: &str = "整数を入力してください = ";

/// Result line for `value`, without the trailing newline.
#[must_use]
pub fn result_message(value: i64, is_palindrome: bool) -> String {
    if is_palindrome {
        format!("「{value}」は回文数です。")
    } else {
        format!("「{value}」は回文数ではありません。")
    }
}

/// Outcome of one palindrome check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub schema_version: String,
    /// The value as read.
    pub value: i64,
    /// The digit reversal compared against `value`, after the overflow policy.
    #[serde(serialize_with = "serialize_reversed")]
    pub reversed: i128,
    pub is_palindrome: bool,
    pub width: IntWidth,
    pub overflow_policy: OverflowPolicy,
    /// True when the `wrap` policy changed the reversal.
    pub wrapped: bool,
}

impl CheckReport {
    /// The line printed in text mode.
    #[must_use]
    pub fn message(&self) -> String {
        result_message(self.value, self.is_palindrome)
    }
}

/// JSON numbers are limited to 64 bits here; a widened reversal beyond
/// `i64` is written as a decimal string.
fn serialize_reversed<S: Serializer>(reversed: &i128, serializer: S) -> Result<S::Ok, S::Error> {
    match i64::try_from(*reversed) {
        Ok(small) => serializer.serialize_i64(small),
        Err(_) => serializer.collect_str(reversed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(value: i64, reversed: i128) -> CheckReport {
        CheckReport {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            value,
            reversed,
            is_palindrome: i128::from(value) == reversed,
            width: IntWidth::I64,
            overflow_policy: OverflowPolicy::Widen,
            wrapped: false,
        }
    }

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(121, true), "「121」は回文数です。");
        assert_eq!(result_message(123, false), "「123」は回文数ではありません。");
        assert_eq!(result_message(-121, true), "「-121」は回文数です。");
    }

    #[test]
    fn test_report_message_follows_verdict() {
        assert_eq!(report(0, 0).message(), "「0」は回文数です。");
        assert_eq!(report(123, 321).message(), "「123」は回文数ではありません。");
    }

    #[test]
    fn test_reversed_serialized_as_number_when_small() {
        let json = serde_json::to_value(report(123, 321)).unwrap();
        assert_eq!(json["reversed"], serde_json::json!(321));
        assert_eq!(json["width"], serde_json::json!("i64"));
        assert_eq!(json["overflow_policy"], serde_json::json!("widen"));
    }

    #[test]
    fn test_reversed_serialized_as_string_when_wide() {
        let json =
            serde_json::to_value(report(1_000_000_000_000_000_099, 9_900_000_000_000_000_001))
                .unwrap();
        assert_eq!(json["reversed"], serde_json::json!("9900000000000000001"));
        assert_eq!(json["is_palindrome"], serde_json::json!(false));
    }
}
