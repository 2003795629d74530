//! Logging infrastructure for repofold.
//!
//! Structured logging via `tracing`, initialized once at the CLI boundary.
//! The pipeline core emits `debug!` events per skipped path and an `info!`
//! summary per run; library consumers can install their own subscriber
//! instead of calling [`init_tracing`].

use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize the tracing subscriber for structured logging.
///
/// Honors `RUST_LOG` when set; otherwise `verbose` selects a debug-level
/// filter for repofold crates, and the default is info/warn.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new(
                    "repofold=debug,repofold_packet=debug,repofold_selectors=debug,\
                     repofold_config=debug,repofold_utils=debug,info",
                )
            } else {
                EnvFilter::try_new("repofold=info,repofold_packet=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
