//! Exit code constants for palcheck.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Check completed (palindrome or not) |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 3 | `PARSE_ERROR` | Input was not an integer of the selected width |
//! | 4 | `OVERFLOW` | Digit reversal overflowed under the `error` policy |

/// Exit codes matching the documented exit code table.
///
/// The numeric values are part of the public API and will not change in 1.x
/// releases.
///
/// # Example
///
/// ```rust
/// use palcheck_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::PARSE_ERROR, ExitCode::from_i32(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - the check completed, whatever its verdict
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure such as a broken stdout
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid flags or configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Parse error - stdin did not hold a usable integer
    pub const PARSE_ERROR: ExitCode = ExitCode(3);

    /// Overflow - reversal not representable and policy is `error`
    pub const OVERFLOW: ExitCode = ExitCode(4);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, OverflowError, PalcheckError, ParseError};
    use crate::types::IntWidth;

    #[test]
    fn test_exit_code_constants() {
        assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
        assert_eq!(ExitCode::INTERNAL.as_i32(), 1);
        assert_eq!(ExitCode::CLI_ARGS.as_i32(), 2);
        assert_eq!(ExitCode::PARSE_ERROR.as_i32(), 3);
        assert_eq!(ExitCode::OVERFLOW.as_i32(), 4);
    }

    #[test]
    fn test_error_to_exit_code() {
        let err = PalcheckError::Config(ConfigError::InvalidFile("bad".to_string()));
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);

        let err = PalcheckError::Parse(ParseError::Empty);
        assert_eq!(err.to_exit_code(), ExitCode::PARSE_ERROR);

        let err = PalcheckError::Overflow(OverflowError {
            value: 2_000_000_003,
            width: IntWidth::I32,
        });
        assert_eq!(err.to_exit_code(), ExitCode::OVERFLOW);

        let err = PalcheckError::Io(std::io::Error::other("closed"));
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
    }

    #[test]
    fn test_i32_conversions() {
        let code: ExitCode = 4.into();
        assert_eq!(code, ExitCode::OVERFLOW);
        let raw: i32 = ExitCode::CLI_ARGS.into();
        assert_eq!(raw, 2);
    }
}
