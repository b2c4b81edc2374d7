//! Translation file synchronization.
//!
//! For each configured language, reads the existing translation file (if
//! any), merges it with the schema projection for that language and writes
//! the result back as 2-space indented JSON.

pub mod error;
pub mod layout;
pub mod report;
pub mod store;
pub mod synchronizer;

/// Sync error type.
pub use error::SyncError;
/// Locale file layout.
pub use layout::LocaleLayout;
/// Run reports.
pub use report::{LanguageOutcome, LanguageReport, SyncReport};
/// Synchronizer and its options.
pub use synchronizer::{SyncOptions, Synchronizer};
