//! Per-language results of a sync run.

use crate::SyncError;
use std::fmt;
use std::path::PathBuf;

/// What happened (or would happen, in a dry run) to one language file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file existed with different contents and was rewritten.
    Updated,
    /// The file already held the merged contents.
    Unchanged,
}

impl LanguageOutcome {
    pub fn is_change(self) -> bool {
        !matches!(self, LanguageOutcome::Unchanged)
    }
}

impl fmt::Display for LanguageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageOutcome::Created => "created",
            LanguageOutcome::Updated => "updated",
            LanguageOutcome::Unchanged => "unchanged",
        };
        f.write_str(label)
    }
}

/// Result for one language.
#[derive(Debug)]
pub struct LanguageReport {
    pub language_id: String,
    pub path: PathBuf,
    pub result: Result<LanguageOutcome, SyncError>,
}

/// Results for every language in a run, in processing order.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub languages: Vec<LanguageReport>,
}

impl SyncReport {
    /// Whether every language synchronized without error.
    pub fn is_success(&self) -> bool {
        self.languages.iter().all(|report| report.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LanguageReport> {
        self.languages.iter().filter(|report| report.result.is_err())
    }

    /// Languages whose file was (or would be) created or rewritten.
    pub fn changed(&self) -> impl Iterator<Item = &LanguageReport> {
        self.languages
            .iter()
            .filter(|report| matches!(report.result, Ok(outcome) if outcome.is_change()))
    }

    pub fn outcome(&self, language_id: &str) -> Option<&Result<LanguageOutcome, SyncError>> {
        self.languages
            .iter()
            .find(|report| report.language_id == language_id)
            .map(|report| &report.result)
    }
}
