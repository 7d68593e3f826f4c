//! CLI timing and latency profiling utilities.
//!
//! Uses `tracing` spans with automatic duration tracking via `FmtSpan::CLOSE`.
//! Functions annotated with `#[instrument]` will automatically have their
//! execution time logged when the span closes.
//!
//! # Usage
//!
//! Initialize tracing with timing enabled:
//! ```ignore
//! use roster_cli::timing::init_tracing;
//! init_tracing(true, true); // verbose=true, timing=true
//! ```
//!
//! Then use `#[instrument]` on functions to automatically track timing:
//! ```ignore
//! #[tracing::instrument(skip_all)]
//! async fn run_list() {
//!     // ... fetch and print
//! }
//! ```
//!
//! `log` records from `roster-business` reach the same subscriber through
//! `tracing-subscriber`'s log bridge.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Initialize tracing subscriber with optional timing output.
///
/// # Arguments
/// * `verbose` - If true, enables debug-level logging
/// * `timing` - If true, logs span close events with duration
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    // Configure span events based on timing flag
    let span_events = if timing {
        FmtSpan::CLOSE // Log duration when span closes
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Level used when neither `RUST_LOG` nor a flag says otherwise.
pub fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        // Span close events are logged at INFO level, so we need at least INFO
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}
