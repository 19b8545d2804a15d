//! palcheck - decimal digit palindrome checker
//!
//! Reads one integer from standard input, reverses its decimal digits by
//! repeated truncating division, and reports whether the reversal equals the
//! original value.
//!
//! palcheck can be used in two ways:
//! - **CLI**: run `palcheck` and type a number, or pipe one in
//! - **Library**: call [`check_value`] or drive a [`PalindromeChecker`] over any reader/writer
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! echo 12321 | palcheck
//! echo -121 | palcheck --json
//! echo 1000000009 | palcheck --overflow error
//! palcheck --print-config
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use palcheck::{IntWidth, OverflowPolicy, check_value};
//!
//! let report = check_value(121, IntWidth::I32, OverflowPolicy::Widen)?;
//! assert!(report.is_palindrome);
//! # Ok::<(), palcheck::PalcheckError>(())
//! ```
//!
//! # Stable Public API
//!
//! - [`PalindromeChecker`], [`check_value`] and [`CheckReport`]
//! - [`IntWidth`] and [`OverflowPolicy`]
//! - [`Config`] and [`CliArgs`] - Configuration management
//! - [`PalcheckError`] - Library error type
//! - [`ExitCode`] - CLI exit codes
//! - [`emit_jcs`] - JCS canonical JSON emission

// ============================================================================
// Stable Public API - covered by semver guarantees for 1.x
// ============================================================================

/// Reads one integer and reports whether it is a palindrome.
pub use palcheck_engine::PalindromeChecker;

/// Text prompt-and-message output or canonical JSON output.
pub use palcheck_engine::OutputMode;

/// Check a value without any I/O.
pub use palcheck_engine::check_value;

/// Outcome of one palindrome check, serializable as `palcheck-result.v1`.
pub use palcheck_engine::CheckReport;

/// Integer width the input is parsed into and reversed in.
pub use palcheck_utils::types::IntWidth;

/// Behavior when the digit reversal overflows the selected width.
pub use palcheck_utils::types::OverflowPolicy;

/// Configuration for palcheck runs.
///
/// Precedence: CLI arguments > config file > built-in defaults.
pub use palcheck_config::Config;

/// CLI argument structure for configuration override.
pub use palcheck_config::CliArgs;

/// Library-level error type.
///
/// Library code returns `PalcheckError` and does NOT call `std::process::exit()`.
pub use palcheck_utils::error::PalcheckError;

/// Exit codes matching the documented exit code table.
pub use palcheck_utils::exit_codes::ExitCode;

/// JCS (RFC 8785) canonical JSON emission.
pub use palcheck_utils::canonicalization::emit_jcs;

/// Trait for providing user-friendly error reporting.
pub use palcheck_utils::error::UserFriendlyError;

// ============================================================================
// Internal modules - accessible but not stable
// ============================================================================

pub mod cli;

#[doc(hidden)]
pub use palcheck_utils::{canonicalization, error, exit_codes, logging, types};

#[doc(hidden)]
pub use palcheck_config as config;

#[doc(hidden)]
pub use palcheck_engine::{digits, input, report};
