use std::fmt;
use thiserror::Error;

use crate::types::{ErrorKind, IntWidth};

/// Library-level error type with user-friendly reporting.
///
/// `PalcheckError` is returned by every fallible palcheck operation. It
/// provides:
/// - Detailed error information for programmatic handling
/// - User-friendly messages with context and suggestions
/// - Mapping to CLI exit codes for consistent error reporting
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration/CLI argument errors |
/// | 3 | Input could not be parsed as an integer |
/// | 4 | Digit reversal overflowed the selected width |
/// | 1 | Other errors |
///
/// Library code returns `PalcheckError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum PalcheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Overflow error: {0}")]
    Overflow(#[from] OverflowError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Arithmetic,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Arithmetic => write!(f, "Arithmetic"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with an optional [defaults] section."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' option only accepts a fixed set of values."
            )),
            Self::NotFound { .. } => Some(
                "An explicit --config path or PALCHECK_CONFIG must point to an existing file."
                    .to_string(),
            ),
            Self::DiscoveryFailed { .. } => Some(
                "palcheck searches for .palcheck/config.toml from the current directory upward."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax of the configuration file".to_string(),
                "Run 'palcheck --print-config' to see the effective configuration".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "width" => vec!["Use one of: i16, i32, i64".to_string()],
                "overflow" => vec!["Use one of: widen, wrap, error".to_string()],
                _ => vec!["Check the documentation for valid values".to_string()],
            },
            Self::NotFound { path } => vec![
                format!("Create the file at {path} or fix the path"),
                "Omit --config to use discovery".to_string(),
            ],
            Self::DiscoveryFailed { .. } => {
                vec!["Pass --config with an explicit path".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Input that could not be interpreted as an integer of the selected width.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no integer was provided on standard input")]
    Empty,

    #[error("'{token}' is not a base-10 integer")]
    Invalid { token: String },

    #[error("'{token}' does not fit in {width}")]
    OutOfRange { token: String, width: IntWidth },
}

impl UserFriendlyError for ParseError {
    fn user_message(&self) -> String {
        match self {
            Self::Empty => "No integer was entered".to_string(),
            Self::Invalid { token } => format!("'{token}' is not an integer"),
            Self::OutOfRange { token, width } => format!(
                "'{token}' is outside the range of {width} ({} to {})",
                width.min_value(),
                width.max_value()
            ),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Empty => Some("Standard input ended before any token was read.".to_string()),
            Self::Invalid { .. } => Some(
                "Input must be an optionally signed sequence of decimal digits.".to_string(),
            ),
            Self::OutOfRange { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Empty => vec!["Pipe a number in, e.g. 'echo 121 | palcheck'".to_string()],
            Self::Invalid { .. } => vec!["Enter digits only, e.g. 12321 or -121".to_string()],
            Self::OutOfRange { .. } => {
                vec!["Select a wider integer with --width i64".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Input
    }
}

/// Digit reversal of `value` is not representable in `width`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("reversing the digits of {value} overflows {width}")]
pub struct OverflowError {
    pub value: i64,
    pub width: IntWidth,
}

impl UserFriendlyError for OverflowError {
    fn user_message(&self) -> String {
        format!(
            "The digit reversal of {} does not fit in {}",
            self.value, self.width
        )
    }

    fn context(&self) -> Option<String> {
        Some("The overflow policy is set to 'error'.".to_string())
    }

    fn suggestions(&self) -> Vec<String> {
        vec![
            "Use --overflow widen to compare against the exact reversal".to_string(),
            "Use --overflow wrap for two's-complement wraparound".to_string(),
        ]
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Arithmetic
    }
}

impl UserFriendlyError for PalcheckError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Parse(err) => err.user_message(),
            Self::Overflow(err) => err.user_message(),
            Self::Io(err) => format!("I/O failure: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Parse(err) => err.context(),
            Self::Overflow(err) => err.context(),
            Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Parse(err) => err.suggestions(),
            Self::Overflow(err) => err.suggestions(),
            Self::Io(_) => Vec::new(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Parse(err) => err.category(),
            Self::Overflow(err) => err.category(),
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl PalcheckError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// Format:
    ///
    /// ```text
    /// Error: <message>
    ///
    /// Context: <context>
    ///
    /// Suggestions:
    ///   • <suggestion>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> crate::exit_codes::ExitCode {
        use crate::exit_codes::ExitCode;

        match self {
            PalcheckError::Config(_) => ExitCode::CLI_ARGS,
            PalcheckError::Parse(_) => ExitCode::PARSE_ERROR,
            PalcheckError::Overflow(_) => ExitCode::OVERFLOW,
            PalcheckError::Io(_) => ExitCode::INTERNAL,
        }
    }

    /// Stable kind string for JSON error output.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PalcheckError::Config(_) => ErrorKind::CliArgs,
            PalcheckError::Parse(_) => ErrorKind::Parse,
            PalcheckError::Overflow(_) => ErrorKind::Overflow,
            PalcheckError::Io(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_for_user_includes_suggestions() {
        let err = PalcheckError::from(ParseError::Invalid {
            token: "abc".to_string(),
        });
        let shown = err.display_for_user();
        assert!(shown.starts_with("Error: 'abc' is not an integer"));
        assert!(shown.contains("Context:"));
        assert!(shown.contains("Suggestions:"));
    }

    #[test]
    fn test_out_of_range_message_names_bounds() {
        let err = ParseError::OutOfRange {
            token: "40000".to_string(),
            width: IntWidth::I16,
        };
        assert_eq!(err.to_string(), "'40000' does not fit in i16");
        assert!(err.user_message().contains("-32768 to 32767"));
    }

    #[test]
    fn test_overflow_display() {
        let err = OverflowError {
            value: 1_000_000_009,
            width: IntWidth::I32,
        };
        assert_eq!(
            err.to_string(),
            "reversing the digits of 1000000009 overflows i32"
        );
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(PalcheckError::from(ParseError::Empty).kind(), ErrorKind::Parse);
        let cfg = PalcheckError::from(ConfigError::InvalidFile("x".to_string()));
        assert_eq!(cfg.kind(), ErrorKind::CliArgs);
        assert_eq!(cfg.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_invalid_value_suggestions_are_key_specific() {
        let err = ConfigError::InvalidValue {
            key: "width".to_string(),
            value: "i8".to_string(),
        };
        assert_eq!(err.suggestions(), vec!["Use one of: i16, i32, i64".to_string()]);
    }
}
