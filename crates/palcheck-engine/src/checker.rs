//! The palindrome check run: prompt, read, reverse, compare, report

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use palcheck_utils::canonicalization::emit_jcs;
use palcheck_utils::error::{OverflowError, PalcheckError, ParseError};
use palcheck_utils::logging::check_span;
use palcheck_utils::types::{IntWidth, OverflowPolicy};

use crate::digits::{DigitInt, reverse_checked, reverse_widened, reverse_wrapping};
use crate::input::read_value;
use crate::report::{CheckReport, PROMPT, REPORT_SCHEMA_VERSION};

/// How the run talks to its output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Prompt, then one result message line.
    #[default]
    Text,
    /// No prompt; one line of canonical JSON.
    Json,
}

/// Check `value` in `width` under `overflow`.
///
/// `value` must fit `width`; otherwise a `ParseError::OutOfRange` is returned.
pub fn check_value(
    value: i64,
    width: IntWidth,
    overflow: OverflowPolicy,
) -> Result<CheckReport, PalcheckError> {
    match width {
        IntWidth::I16 => check_in::<i16>(value, width, overflow),
        IntWidth::I32 => check_in::<i32>(value, width, overflow),
        IntWidth::I64 => check_in::<i64>(value, width, overflow),
    }
}

fn check_in<T: DigitInt>(
    value: i64,
    width: IntWidth,
    overflow: OverflowPolicy,
) -> Result<CheckReport, PalcheckError> {
    let typed = T::try_from(i128::from(value)).map_err(|_| ParseError::OutOfRange {
        token: value.to_string(),
        width,
    })?;

    let (reversed, wrapped) = match overflow {
        OverflowPolicy::Widen => (reverse_widened(typed), false),
        OverflowPolicy::Wrap => {
            let reversed: i128 = reverse_wrapping(typed).into();
            (reversed, reversed != reverse_widened(typed))
        }
        OverflowPolicy::Error => {
            let reversed = reverse_checked(typed).ok_or(OverflowError { value, width })?;
            (reversed.into(), false)
        }
    };

    if wrapped {
        warn!(value, reversed = %reversed, %width, "Digit reversal wrapped around");
    }

    Ok(CheckReport {
        schema_version: REPORT_SCHEMA_VERSION.to_string(),
        value,
        reversed,
        is_palindrome: reversed == i128::from(value),
        width,
        overflow_policy: overflow,
        wrapped,
    })
}

/// Reads one integer and reports whether it is a palindrome.
///
/// The checker never exits the process; callers map the returned error to an
/// exit code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeChecker {
    width: IntWidth,
    overflow: OverflowPolicy,
    mode: OutputMode,
}

impl PalindromeChecker {
    #[must_use]
    pub fn new(width: IntWidth, overflow: OverflowPolicy) -> Self {
        Self {
            width,
            overflow,
            mode: OutputMode::Text,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn width(&self) -> IntWidth {
        self.width
    }

    #[must_use]
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Run one check against `input`, writing the prompt and result to `output`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CheckReport, PalcheckError> {
        let span = check_span(&self.width.to_string(), &self.overflow.to_string());
        let _enter = span.enter();

        if self.mode == OutputMode::Text {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        let value = read_value(input, self.width)?;
        debug!(value, "Read input value");

        let report = check_value(value, self.width, self.overflow)?;
        debug!(
            reversed = %report.reversed,
            is_palindrome = report.is_palindrome,
            "Compared reversal with input"
        );

        match self.mode {
            OutputMode::Text => writeln!(output, "{}", report.message())?,
            OutputMode::Json => {
                let json = emit_jcs(&report).map_err(|e| io::Error::other(format!("{e:#}")))?;
                writeln!(output, "{json}")?;
            }
        }
        output.flush()?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_text(input: &str) -> (Result<CheckReport, PalcheckError>, String) {
        let checker = PalindromeChecker::default();
        let mut output = Vec::new();
        let result = checker.run(&mut Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_check_value_spec_examples() {
        let cases = [(0, true), (121, true), (123, false), (-121, true), (10, false)];
        for (value, expected) in cases {
            let report = check_value(value, IntWidth::I32, OverflowPolicy::Widen).unwrap();
            assert_eq!(report.is_palindrome, expected, "value {value}");
        }
        let report = check_value(123, IntWidth::I32, OverflowPolicy::Widen).unwrap();
        assert_eq!(report.reversed, 321);
    }

    #[test]
    fn test_single_digits_are_palindromes() {
        for value in -9..=9 {
            for policy in [
                OverflowPolicy::Widen,
                OverflowPolicy::Wrap,
                OverflowPolicy::Error,
            ] {
                let report = check_value(value, IntWidth::I16, policy).unwrap();
                assert!(report.is_palindrome, "value {value} policy {policy}");
            }
        }
    }

    #[test]
    fn test_overflow_policies() {
        let widened = check_value(1_000_000_009, IntWidth::I32, OverflowPolicy::Widen).unwrap();
        assert_eq!(widened.reversed, 9_000_000_001);
        assert!(!widened.is_palindrome);
        assert!(!widened.wrapped);

        let wrapped = check_value(1_000_000_009, IntWidth::I32, OverflowPolicy::Wrap).unwrap();
        assert_eq!(wrapped.reversed, i128::from(9_000_000_001i64 as i32));
        assert!(wrapped.wrapped);

        let err = check_value(1_000_000_009, IntWidth::I32, OverflowPolicy::Error).unwrap_err();
        assert!(matches!(
            err,
            PalcheckError::Overflow(OverflowError {
                value: 1_000_000_009,
                width: IntWidth::I32
            })
        ));
    }

    #[test]
    fn test_same_value_fits_in_wider_width() {
        let report = check_value(1_000_000_009, IntWidth::I64, OverflowPolicy::Error).unwrap();
        assert_eq!(report.reversed, 9_000_000_001);
    }

    #[test]
    fn test_value_outside_width_is_rejected() {
        let err = check_value(70_000, IntWidth::I16, OverflowPolicy::Widen).unwrap_err();
        assert!(matches!(
            err,
            PalcheckError::Parse(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_run_text_palindrome() {
        let (result, output) = run_text("121\n");
        assert!(result.unwrap().is_palindrome);
        assert_eq!(output, "整数を入力してください = 「121」は回文数です。\n");
    }

    #[test]
    fn test_run_text_not_palindrome() {
        let (result, output) = run_text("123\n");
        assert!(!result.unwrap().is_palindrome);
        assert!(output.ends_with("「123」は回文数ではありません。\n"));
    }

    #[test]
    fn test_run_text_parse_error_leaves_only_prompt() {
        let (result, output) = run_text("twelve\n");
        assert!(matches!(
            result,
            Err(PalcheckError::Parse(ParseError::Invalid { .. }))
        ));
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn test_run_json_has_no_prompt() {
        let checker = PalindromeChecker::new(IntWidth::I32, OverflowPolicy::Widen)
            .with_mode(OutputMode::Json);
        let mut output = Vec::new();
        checker
            .run(&mut Cursor::new("-121"), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "{\"is_palindrome\":true,\"overflow_policy\":\"widen\",\"reversed\":-121,\
             \"schema_version\":\"palcheck-result.v1\",\"value\":-121,\"width\":\"i32\",\
             \"wrapped\":false}\n"
        );
    }
}
