use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "taskboard=debug";

/// Installs the global `tracing` subscriber when debug mode is on.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at debug level. In
/// normal mode nothing is installed and library events are discarded.
pub fn init() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
