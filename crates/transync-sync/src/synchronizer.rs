//! Per-language synchronization of translation files.

use crate::layout::LocaleLayout;
use crate::report::{LanguageOutcome, LanguageReport, SyncReport};
use crate::store::{self, PersistedFile};
use crate::SyncError;
use log::{debug, error, info};
use std::path::Path;
use transync_config::SyncConfig;
use transync_core::{Group, MergePolicy, Projection, Schema, merge, project};

/// Run-wide settings for a synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Language whose file always mirrors the schema text.
    pub default_language: String,
    pub policy: MergePolicy,
    /// Compute outcomes without touching the filesystem.
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            policy: MergePolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Reconciles each language's translation file with the schema.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    schema: Schema,
    layout: LocaleLayout,
    options: SyncOptions,
}

impl Synchronizer {
    pub fn new(schema: Schema, layout: LocaleLayout, options: SyncOptions) -> Self {
        Self {
            schema,
            layout,
            options,
        }
    }

    /// Build a synchronizer from a loaded config, resolving relative paths
    /// against `base_dir`.
    pub fn from_config(config: &SyncConfig, base_dir: &Path, schema: Schema) -> Self {
        let layout = LocaleLayout::new(
            config.paths.locale_root(base_dir),
            config.paths.file_name.clone(),
        );
        let options =
            SyncOptions::new(config.default_language.clone()).with_policy(config.policy);
        Self::new(schema, layout, options)
    }

    pub fn layout(&self) -> &LocaleLayout {
        &self.layout
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.options.dry_run = dry_run;
    }

    /// Merge a persisted tree for one language without any IO.
    pub fn merge_language(&self, language_id: &str, persisted: &Group) -> Group {
        let is_default = language_id == self.options.default_language;
        let target = project(&self.schema, Projection::for_language(is_default));
        merge(persisted, target, &self.options.policy, is_default)
    }

    /// Synchronize one language's file.
    pub fn sync_language(&self, language_id: &str) -> Result<LanguageOutcome, SyncError> {
        let path = self.layout.translation_path(language_id);
        let PersistedFile { raw, tree } = store::read_persisted(&path);

        let merged = self.merge_language(language_id, &tree);
        let rendered = merged.to_pretty_json()?;

        let outcome = match raw {
            None => LanguageOutcome::Created,
            Some(existing) if existing == rendered.as_bytes() => LanguageOutcome::Unchanged,
            Some(_) => LanguageOutcome::Updated,
        };

        if self.options.dry_run {
            debug!("dry run; not writing (language={language_id}, outcome={outcome})");
            return Ok(outcome);
        }
        if outcome == LanguageOutcome::Unchanged {
            debug!("translations up to date (path={})", path.display());
            return Ok(outcome);
        }

        let dir = self.layout.language_dir(language_id);
        store::ensure_dir(&dir).map_err(|source| SyncError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        store::write_atomic(&path, &rendered).map_err(|source| SyncError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote translations (path={}, bytes={})", path.display(), rendered.len());
        Ok(outcome)
    }

    /// Synchronize every listed language in order.
    ///
    /// A failing language is recorded in the report and does not stop the
    /// remaining ones.
    pub fn sync_all<'a>(&self, language_ids: impl IntoIterator<Item = &'a str>) -> SyncReport {
        if !self.options.dry_run {
            if let Err(err) = store::ensure_dir(self.layout.root()) {
                error!(
                    "failed to create locale root (path={}, error={})",
                    self.layout.root().display(),
                    err
                );
            }
        }

        let mut report = SyncReport::default();
        for language_id in language_ids {
            info!("{language_id}");
            let result = self.sync_language(language_id);
            match &result {
                Ok(outcome) => info!("synchronized {language_id} ({outcome})"),
                Err(err) => error!("failed to synchronize {language_id}: {err}"),
            }
            report.languages.push(LanguageReport {
                language_id: language_id.to_string(),
                path: self.layout.translation_path(language_id),
                result,
            });
        }
        report
    }
}
