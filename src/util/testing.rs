//! Test logging setup shared by unit and integration tests

use std::sync::Once;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Default filter when `RUST_LOG` is unset: this crate's spans and events only.
const DEFAULT_FILTER: &str = "sidenav=debug";

/// Install a test-writer subscriber once per test process.
///
/// Output goes through libtest capture, so it only shows for failing tests
/// or with `--nocapture`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // another harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_span_events(FmtSpan::CLOSE)
            .try_init();
    });
}
