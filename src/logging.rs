//! Diagnostic logging to stderr.
//!
//! Quiet by default. `--verbose` enables debug output for this crate and
//! `RUST_LOG` overrides both:
//! ```bash
//! RUST_LOG=heroku_accounts=trace heroku-accounts set work
//! ```

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,heroku_accounts=debug";

pub fn init(verbose: bool) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::new(DEFAULT_FILTER)
    };

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
