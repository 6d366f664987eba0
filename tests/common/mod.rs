use std::sync::Once;

static INIT: Once = Once::new();

/// Install an env-filtered fmt subscriber once per test binary.
///
/// `RUST_LOG=debug cargo test` shows the router's dispatch events.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}
