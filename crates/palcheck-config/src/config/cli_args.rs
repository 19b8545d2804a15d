use std::path::PathBuf;

/// Values supplied on the command line, before precedence is applied.
///
/// `None` means "not given"; the file or built-in default is used instead.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit configuration file path (skips discovery)
    pub config_path: Option<PathBuf>,
    /// Integer width name (`i16`, `i32`, `i64`)
    pub width: Option<String>,
    /// Overflow policy name (`widen`, `wrap`, `error`)
    pub overflow: Option<String>,
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}
