use std::str::FromStr;

use palcheck_utils::error::ConfigError;
use palcheck_utils::types::{IntWidth, OverflowPolicy};

fn parse_named<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    T::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

pub(crate) fn parse_width(raw: &str) -> Result<IntWidth, ConfigError> {
    parse_named("width", raw)
}

pub(crate) fn parse_overflow(raw: &str) -> Result<OverflowPolicy, ConfigError> {
    parse_named("overflow", raw)
}
