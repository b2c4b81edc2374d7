//! Command implementations behind the `transync` binary.

use anyhow::{Context, bail};
use log::{debug, info};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use transync_config::{LayeredConfigOptions, SyncConfig, load_translation_schema};
use transync_core::{Schema, derive_key_paths, key_paths};
use transync_sync::{SyncReport, Synchronizer};

/// A loaded config together with the directory its paths resolve against.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: SyncConfig,
    pub base_dir: PathBuf,
}

impl Workspace {
    /// Load the layered config for `cwd`, applying runtime overrides last.
    pub fn load(cwd: &Path, runtime_paths: &[PathBuf]) -> anyhow::Result<Self> {
        let options = runtime_paths
            .iter()
            .fold(LayeredConfigOptions::new(cwd), |options, path| {
                options.with_runtime_path(path)
            });
        Self::load_with_options(options)
    }

    pub fn load_with_options(options: LayeredConfigOptions) -> anyhow::Result<Self> {
        let layered = SyncConfig::load_layered_with_options(options)
            .context("failed to load layered config")?;
        debug!("layered config loaded (layers={})", layered.layers.len());
        Ok(Self {
            config: layered.config,
            base_dir: layered.base_dir,
        })
    }

    pub fn schema_path(&self) -> PathBuf {
        self.config.paths.schema_path(&self.base_dir)
    }

    pub fn schema(&self) -> anyhow::Result<Schema> {
        let path = self.schema_path();
        load_translation_schema(&path)
            .with_context(|| format!("failed to load translation schema {}", path.display()))
    }

    pub fn synchronizer(&self, dry_run: bool) -> anyhow::Result<Synchronizer> {
        let mut synchronizer =
            Synchronizer::from_config(&self.config, &self.base_dir, self.schema()?);
        synchronizer.set_dry_run(dry_run);
        Ok(synchronizer)
    }

    /// Languages to process: all configured ones, or the requested subset.
    pub fn select_languages(&self, requested: &[String]) -> anyhow::Result<Vec<String>> {
        if requested.is_empty() {
            return Ok(self.config.language_ids().map(str::to_string).collect());
        }
        for language_id in requested {
            if !self.config.languages.contains_key(language_id) {
                bail!("language `{language_id}` is not configured");
            }
        }
        Ok(requested.to_vec())
    }

    /// Run the synchronizer over the selected languages.
    pub fn sync(&self, requested: &[String], dry_run: bool) -> anyhow::Result<SyncReport> {
        let languages = self.select_languages(requested)?;
        let synchronizer = self.synchronizer(dry_run)?;
        info!(
            "synchronizing {} language(s) into {}",
            languages.len(),
            synchronizer.layout().root().display()
        );
        Ok(synchronizer.sync_all(languages.iter().map(String::as_str)))
    }
}

/// One line per language, e.g. `es  updated  public/locales/es/translation.json`.
pub fn render_report(report: &SyncReport, dry_run: bool) -> String {
    let mut out = String::new();
    for language in &report.languages {
        let status = match &language.result {
            Ok(outcome) if dry_run && outcome.is_change() => format!("would be {outcome}"),
            Ok(outcome) => outcome.to_string(),
            Err(err) => format!("failed: {err}"),
        };
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            language.language_id,
            status,
            language.path.display()
        );
    }
    out
}

/// Derived key paths, either one per line or as a JSON tree.
pub fn render_keys(schema: &Schema, tree: bool) -> anyhow::Result<String> {
    if tree {
        let derived = derive_key_paths(schema);
        let mut out = serde_json::to_string_pretty(&derived.to_value())
            .context("failed to render key-path tree")?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = key_paths(schema).join("\n");
    out.push('\n');
    Ok(out)
}

/// Configured languages with their native names; the default is starred.
pub fn render_languages(config: &SyncConfig) -> String {
    let mut out = String::new();
    for (language_id, language) in &config.languages {
        let marker = if config.is_default_language(language_id) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(out, "{marker} {language_id}\t{}", language.native_name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;
    use transync_config::DEFAULT_CONFIG_FILE;

    const CONFIG: &str = r#"{
        default_language: "en",
        languages: {
            en: { native_name: "English" },
            es: { native_name: "Español" },
        },
    }"#;

    const SCHEMA: &str = r#"{
        T_ANIMALS: { bird: { budgie: "My budgie is small but cuddly." } },
        T_SENTENCES: { myBirds_one: "I own an adorable bird." },
    }"#;

    fn project() -> TempDir {
        let temp = TempDir::new().expect("tmp");
        fs::create_dir_all(temp.path().join(".git")).expect("git");
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), CONFIG).expect("config");
        fs::write(temp.path().join("translations.json5"), SCHEMA).expect("schema");
        temp
    }

    fn workspace(root: &Path) -> Workspace {
        let mut options = LayeredConfigOptions::new(root);
        options.user_config_path = None;
        Workspace::load_with_options(options).expect("workspace")
    }

    #[test]
    fn sync_writes_every_configured_language() {
        let temp = project();
        let workspace = workspace(temp.path());

        let report = workspace.sync(&[], false).expect("sync");
        assert!(report.is_success());

        let es = fs::read_to_string(
            workspace
                .base_dir
                .join("public/locales/es/translation.json"),
        )
        .expect("es");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&es).expect("json"),
            serde_json::json!({
                "T_ANIMALS": { "bird": { "budgie": null } },
                "T_SENTENCES": { "myBirds_one": null }
            })
        );
    }

    #[test]
    fn unknown_language_is_rejected() {
        let temp = project();
        let err = workspace(temp.path())
            .sync(&["fr".to_string()], false)
            .unwrap_err();
        assert!(format!("{err}").contains("`fr` is not configured"));
    }

    #[test]
    fn missing_schema_file_has_context() {
        let temp = project();
        fs::remove_file(temp.path().join("translations.json5")).expect("remove");
        let err = workspace(temp.path()).sync(&[], false).unwrap_err();
        assert!(format!("{err}").contains("failed to load translation schema"));
    }

    #[test]
    fn dry_run_report_uses_conditional_wording() {
        let temp = project();
        let workspace = workspace(temp.path());
        let report = workspace.sync(&["es".to_string()], true).expect("sync");

        let rendered = render_report(&report, true);
        assert!(rendered.starts_with("es\twould be created\t"));
        assert!(!workspace.base_dir.join("public").exists());
    }

    #[test]
    fn keys_render_as_lines_or_tree() {
        let schema = Schema::builder()
            .leaf("Group.key", "Value")
            .leaf("Group.nested.inner", "X")
            .build()
            .expect("schema");

        assert_eq!(
            render_keys(&schema, false).expect("keys"),
            "Group.key\nGroup.nested.inner\n"
        );
        let tree: serde_json::Value =
            serde_json::from_str(&render_keys(&schema, true).expect("tree")).expect("json");
        assert_eq!(
            tree,
            serde_json::json!({ "Group": { "key": "Group.key", "nested": { "inner": "Group.nested.inner" } } })
        );
    }

    #[test]
    fn languages_mark_the_default() {
        let config = SyncConfig::builder()
            .language("en", "English")
            .language("es", "Español")
            .build();
        assert_eq!(render_languages(&config), "* en\tEnglish\n  es\tEspañol\n");
    }
}
