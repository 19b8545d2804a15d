//! Reading the integer token from standard input

use std::io::{self, BufRead};

use palcheck_utils::error::{PalcheckError, ParseError};
use palcheck_utils::types::IntWidth;

/// Read the first whitespace-delimited token.
///
/// Blank lines are skipped. Returns `Ok(None)` at end of input. Only the line
/// holding the token is consumed; anything after it is left unread.
///
/// Lines are read as raw bytes. Invalid UTF-8 is replaced with U+FFFD, so such
/// input surfaces as an unparseable token rather than an I/O error.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = String::from_utf8_lossy(&line).split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Parse `token` as a base-10 integer that fits `width`.
///
/// Accepts an optional `+` or `-` followed by one or more ASCII digits and
/// nothing else.
pub fn parse_value(token: &str, width: IntWidth) -> Result<i64, ParseError> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Invalid {
            token: token.to_string(),
        });
    }

    let out_of_range = || ParseError::OutOfRange {
        token: token.to_string(),
        width,
    };

    // Only digits remain, so the sole failure mode is magnitude.
    let value: i128 = token.parse().map_err(|_| out_of_range())?;
    if !width.contains(value) {
        return Err(out_of_range());
    }
    i64::try_from(value).map_err(|_| out_of_range())
}

/// Read and parse the integer in one step.
pub fn read_value<R: BufRead>(reader: &mut R, width: IntWidth) -> Result<i64, PalcheckError> {
    let token = read_token(reader)?.ok_or(ParseError::Empty)?;
    Ok(parse_value(&token, width)?)
}
