//! End-to-end synchronization tests against a scratch locale root.

use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use transync_config::SyncConfig;
use transync_core::{MergePolicy, Schema};
use transync_sync::{LanguageOutcome, LocaleLayout, SyncError, SyncOptions, Synchronizer};
use transync_test_utils::{LocaleFixture, animal_schema, sample_schema};
use transync_test_utils::locales::TRANSLATION_FILE;

fn synchronizer(fixture: &LocaleFixture, schema: Schema, policy: MergePolicy) -> Synchronizer {
    Synchronizer::new(
        schema,
        LocaleLayout::new(fixture.root(), TRANSLATION_FILE),
        SyncOptions::new("en").with_policy(policy),
    )
}

fn policy(keep_unrecognized_keys: bool, keep_existing_translations: bool) -> MergePolicy {
    MergePolicy {
        keep_unrecognized_keys,
        keep_existing_translations,
    }
}

/// Missing files are created from the schema: text for the default language,
/// nulls for the rest.
#[test]
fn creates_files_for_every_language() {
    let fixture = LocaleFixture::new();
    let sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());

    let report = sync.sync_all(["en", "es"]);
    assert!(report.is_success());
    assert!(matches!(
        report.outcome("en"),
        Some(Ok(LanguageOutcome::Created))
    ));

    assert_eq!(
        fixture.read("en"),
        json!({
            "bird": {
                "budgie": "My budgie is small but cuddly.",
                "cockatoo": "My cockatoo is crazy."
            }
        })
    );
    assert_eq!(
        fixture.read("es"),
        json!({ "bird": { "budgie": null, "cockatoo": null } })
    );
}

#[test]
fn null_leaves_are_written_explicitly() {
    let fixture = LocaleFixture::new();
    let sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());
    sync.sync_language("es").expect("sync");

    assert_eq!(
        fixture.read_raw("es"),
        "{\n  \"bird\": {\n    \"budgie\": null,\n    \"cockatoo\": null\n  }\n}"
    );
}

#[test]
fn keeps_existing_translations() {
    let fixture = LocaleFixture::new();
    fixture.write("es", &json!({ "bird": { "budgie": "Mi periquito es..." } }));
    let sync = synchronizer(&fixture, animal_schema(), policy(false, true));

    assert_eq!(sync.sync_language("es").expect("sync"), LanguageOutcome::Updated);
    assert_eq!(
        fixture.read("es"),
        json!({ "bird": { "budgie": "Mi periquito es...", "cockatoo": null } })
    );
}

#[test]
fn keeps_unrecognized_keys_when_enabled() {
    let fixture = LocaleFixture::new();
    fixture.write(
        "es",
        &json!({ "legacyKey": "old text", "bird": { "extra": "x", "budgie": "Hola" } }),
    );
    let sync = synchronizer(&fixture, animal_schema(), policy(true, true));
    sync.sync_language("es").expect("sync");

    assert_eq!(
        fixture.read("es"),
        json!({
            "bird": { "budgie": "Hola", "cockatoo": null, "extra": "x" },
            "legacyKey": "old text"
        })
    );
}

#[test]
fn drops_unrecognized_keys_by_default() {
    let fixture = LocaleFixture::new();
    fixture.write("es", &json!({ "legacyKey": "old text", "bird": { "extra": "x" } }));
    let sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());
    sync.sync_language("es").expect("sync");

    assert_eq!(
        fixture.read("es"),
        json!({ "bird": { "budgie": null, "cockatoo": null } })
    );
}

#[test]
fn number_values_never_replace_schema_leaves() {
    let fixture = LocaleFixture::new();
    fixture.write("es", &json!({ "bird": { "budgie": 42 } }));
    let sync = synchronizer(&fixture, animal_schema(), policy(false, true));
    sync.sync_language("es").expect("sync");

    assert_eq!(fixture.read("es")["bird"]["budgie"], json!(null));
}

/// The default language is reset to schema text even when its file was edited.
#[test]
fn default_language_is_reset_to_schema() {
    let fixture = LocaleFixture::new();
    fixture.write(
        "en",
        &json!({ "bird": { "budgie": "edited by hand", "cockatoo": null } }),
    );
    let sync = synchronizer(&fixture, animal_schema(), policy(false, true));

    assert_eq!(sync.sync_language("en").expect("sync"), LanguageOutcome::Updated);
    assert_eq!(
        fixture.read("en")["bird"]["budgie"],
        json!("My budgie is small but cuddly.")
    );
}

#[test]
fn absent_file_matches_empty_object() {
    let absent = LocaleFixture::new();
    let empty = LocaleFixture::new();
    empty.write_raw("es", "{}");

    for fixture in [&absent, &empty] {
        synchronizer(fixture, sample_schema(), policy(true, true))
            .sync_language("es")
            .expect("sync");
    }

    assert_eq!(absent.read_raw("es"), empty.read_raw("es"));
}

#[test]
fn malformed_file_is_treated_as_empty() {
    let fixture = LocaleFixture::new();
    fixture.write_raw("es", "{ \"bird\": ");
    let sync = synchronizer(&fixture, animal_schema(), policy(true, true));

    assert_eq!(sync.sync_language("es").expect("sync"), LanguageOutcome::Updated);
    assert_eq!(
        fixture.read("es"),
        json!({ "bird": { "budgie": null, "cockatoo": null } })
    );
}

/// Files saved with a byte order mark keep their translations.
#[test]
fn byte_order_mark_keeps_translations() {
    let fixture = LocaleFixture::new();
    fixture.write_raw("es", "\u{feff}{\"bird\":{\"budgie\":\"Mi periquito es...\"}}");
    let sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());

    assert_eq!(sync.sync_language("es").expect("sync"), LanguageOutcome::Updated);
    assert_eq!(
        fixture.read("es"),
        json!({ "bird": { "budgie": "Mi periquito es...", "cockatoo": null } })
    );
}

/// An existing file that is not UTF-8 is overwritten, not created.
#[test]
fn undecodable_file_is_reported_as_updated() {
    let fixture = LocaleFixture::new();
    fixture.write_raw("es", "");
    fs::write(fixture.path("es"), [0xff, 0xfe, 0x00]).expect("write");
    let sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());

    assert_eq!(sync.sync_language("es").expect("sync"), LanguageOutcome::Updated);
    assert_eq!(
        fixture.read("es"),
        json!({ "bird": { "budgie": null, "cockatoo": null } })
    );
}

/// A second run with no changes rewrites nothing and yields identical bytes.
#[test]
fn rerun_is_byte_identical() {
    let fixture = LocaleFixture::new();
    fixture.write(
        "es",
        &json!({ "T_ANIMALS": { "bird": { "budgie": "Mi periquito es..." } }, "old": 1 }),
    );
    let sync = synchronizer(&fixture, sample_schema(), policy(true, true));

    assert!(sync.sync_all(["en", "es", "fr"]).is_success());
    let first: Vec<String> = ["en", "es", "fr"].iter().map(|id| fixture.read_raw(id)).collect();

    let report = sync.sync_all(["en", "es", "fr"]);
    assert_eq!(report.changed().count(), 0);
    let second: Vec<String> = ["en", "es", "fr"].iter().map(|id| fixture.read_raw(id)).collect();
    assert_eq!(first, second);
}

#[test]
fn dry_run_reports_without_writing() {
    let fixture = LocaleFixture::new();
    fixture.write("es", &json!({ "bird": { "budgie": "Hola" } }));
    let before = fixture.read_raw("es");

    let mut sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());
    sync.set_dry_run(true);
    let report = sync.sync_all(["en", "es"]);

    assert_eq!(report.changed().count(), 2);
    assert!(!fixture.exists("en"));
    assert_eq!(fixture.read_raw("es"), before);

    sync.set_dry_run(false);
    assert_eq!(sync.sync_language("en").expect("sync"), LanguageOutcome::Created);
    sync.set_dry_run(true);
    assert_eq!(sync.sync_language("en").expect("sync"), LanguageOutcome::Unchanged);
}

/// Paths from the config resolve against the project directory.
#[test]
fn config_driven_dry_run_leaves_project_untouched() {
    let fixture = LocaleFixture::new();
    let config = SyncConfig::builder()
        .default_language("en")
        .language("en", "English")
        .language("es", "Español")
        .build();
    let sync = Synchronizer::from_config(&config, fixture.base_dir(), animal_schema());
    assert_eq!(sync.layout().root(), fixture.root());

    let dry = Synchronizer::new(
        animal_schema(),
        sync.layout().clone(),
        sync.options().clone().with_dry_run(true),
    );
    let report = dry.sync_all(config.language_ids());
    assert_eq!(report.changed().count(), 2);
    assert!(!fixture.root().exists());

    assert!(sync.sync_all(config.language_ids()).is_success());
    assert!(fixture.exists("en"));
    assert!(fixture.exists("es"));
}

/// One language failing does not stop the others.
#[test]
fn failures_are_isolated_per_language() {
    let fixture = LocaleFixture::new();
    fs::create_dir_all(fixture.root()).expect("root");
    fs::write(fixture.root().join("de"), "not a directory").expect("blocker");
    let sync = synchronizer(&fixture, animal_schema(), MergePolicy::default());

    let report = sync.sync_all(["de", "en", "es"]);
    assert!(!report.is_success());
    let failed: Vec<&str> = report
        .failures()
        .map(|report| report.language_id.as_str())
        .collect();
    assert_eq!(failed, vec!["de"]);
    assert!(matches!(
        report.outcome("de"),
        Some(Err(SyncError::CreateDir { .. }))
    ));
    assert!(fixture.exists("en"));
    assert!(fixture.exists("es"));
}
