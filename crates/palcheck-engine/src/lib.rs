//! Palindrome checking engine for palcheck
//!
//! - [`digits`]: digit reversal by repeated truncating division, in any supported width
//! - [`input`]: reading and parsing the single integer token from a reader
//! - [`checker`]: [`PalindromeChecker`], the prompt/read/compare/report run
//! - [`report`]: the result record and the fixed output messages

pub mod checker;
pub mod digits;
pub mod input;
pub mod report;

pub use checker::{OutputMode, PalindromeChecker, check_value};
pub use report::CheckReport;
