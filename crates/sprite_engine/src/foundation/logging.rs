//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter such as `"info"` or `"sprite_engine=debug"`
///
/// `RUST_LOG` still takes precedence. Calling this more than once is harmless,
/// which lets tests and demos share it.
pub fn init_with_level(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
