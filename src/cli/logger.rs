//! Logging setup for the console binary
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for the given verbosity; `RUST_LOG` takes precedence
pub fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "inventory=debug,warn"
    } else if quiet {
        "error"
    } else {
        "inventory=warn"
    }
}

pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    // A subscriber may already be installed when embedded; keep it
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true, false), "inventory=debug,warn");
        assert_eq!(default_filter(false, true), "error");
        assert_eq!(default_filter(false, false), "inventory=warn");
    }
}
