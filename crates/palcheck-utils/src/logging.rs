//! Logging infrastructure for palcheck
//!
//! All diagnostics go to stderr. Stdout is reserved for the prompt and the
//! result line (or the JSON report), so logging can never corrupt output that
//! another program is parsing.

use tracing::{Level, span};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "palcheck=debug,palcheck_engine=debug,warn"
    } else {
        "palcheck=warn,palcheck_engine=warn,warn"
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice returns an
/// error from the second call, which callers are free to ignore.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()?;

    Ok(())
}

/// Span wrapping a single check, carrying the width and policy in effect.
pub fn check_span(width: &str, overflow: &str) -> tracing::Span {
    span!(
        Level::DEBUG,
        "palindrome_check",
        width = %width,
        overflow = %overflow,
    )
}
