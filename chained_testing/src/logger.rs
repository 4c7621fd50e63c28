//! Logger set-up shared by all test-suites.
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize `env_logger` once per test binary.
///
/// Defaults to the `warn` level; `RUST_LOG` overrides it, e.g. `RUST_LOG=chained=debug` shows
/// every rehash.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .is_test(true)
        .try_init();
    });
}
