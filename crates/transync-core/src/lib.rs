//! Translation tree model and merge core.
//!
//! This crate owns the tagged tree type, the canonical schema, the projections
//! used as merge targets, the retention-aware merge and key-path derivation.
//! Nothing here touches the filesystem.

mod keys;
mod merge;
mod policy;
mod project;
mod schema;
mod tree;

/// Key-path derivation.
pub use keys::{derive_key_paths, key_paths};
/// Tree merge passes.
pub use merge::{keep_existing_translations, keep_unrecognized_keys, merge};
/// Retention policy.
pub use policy::MergePolicy;
/// Schema projections.
pub use project::{Projection, project};
/// Schema model and builder.
pub use schema::{Schema, SchemaBuilder, SchemaError};
/// Tree model.
pub use tree::{Group, Node};
