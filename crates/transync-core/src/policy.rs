//! Retention policy applied when merging persisted files.

use serde::{Deserialize, Serialize};

/// Controls what a merge keeps from the persisted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePolicy {
    /// Carry over persisted keys the schema does not define.
    #[serde(default)]
    pub keep_unrecognized_keys: bool,
    /// Keep persisted translations for non-default languages.
    #[serde(default = "default_keep_existing_translations")]
    pub keep_existing_translations: bool,
}

fn default_keep_existing_translations() -> bool {
    true
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            keep_unrecognized_keys: false,
            keep_existing_translations: default_keep_existing_translations(),
        }
    }
}
