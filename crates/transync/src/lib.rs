//! Public surface for transync.
//!
//! Re-exports the building blocks and provides the workspace helpers the
//! command-line tool is built on.

pub mod commands;

/// Re-export for convenience.
pub use transync_config as config;
/// Re-export for convenience.
pub use transync_core as schema;
/// Re-export for convenience.
pub use transync_sync as sync;

/// Initialize logging through env_logger.
///
/// Progress is logged at `info`, which is shown unless `RUST_LOG` says
/// otherwise. Calling this more than once is harmless.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}
