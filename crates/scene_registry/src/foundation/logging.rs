//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Honors `RUST_LOG`. Panics if a logger is already installed; binaries call
/// this exactly once at startup.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring an already-installed logger
///
/// Tests call this from many threads; only the first call wins.
pub fn try_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
