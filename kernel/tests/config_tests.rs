//! Tests for layered configuration loading.
//!
//! Uses tempfile for isolated configuration files.

use std::fs;

use switchdiff_kernel::infrastructure::config::Settings;
use switchdiff_kernel::{ChangeKind, Chunking};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_without_file() {
    let settings = Settings::new().unwrap();

    assert!(settings.diff.ignore_whitespace);
    assert!(!settings.diff.ignore_case);
    assert_eq!(settings.diff.chunking, Chunking::SectionPreserving);
    assert!(!settings.acl.ignore_removed_duplicate_acls);
    assert_eq!(settings.telemetry.service_name, "switchdiff");
    assert_eq!(settings.telemetry.log_level, "info");
    assert!(!settings.telemetry.json);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "switchdiff.toml",
        r#"
[diff]
ignore_case = true
chunking = "lines"

[acl]
ignore_removed_duplicate_acls = true

[telemetry]
log_level = "debug"
json = true
"#,
    );

    let settings = Settings::from_file(&path).unwrap();

    assert!(settings.diff.ignore_whitespace);
    assert!(settings.diff.ignore_case);
    assert_eq!(settings.diff.chunking, Chunking::Lines);
    assert!(settings.acl.ignore_removed_duplicate_acls);
    assert_eq!(settings.telemetry.log_level, "debug");
    assert!(settings.telemetry.json);
    assert_eq!(settings.telemetry.service_name, "switchdiff");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "partial.toml", "[acl]\nignore_removed_duplicate_acls = true\n");

    let settings = Settings::from_file(&path).unwrap();

    assert!(settings.acl.ignore_removed_duplicate_acls);
    assert_eq!(settings.diff, Settings::default().diff);
    assert_eq!(settings.telemetry, Settings::default().telemetry);
}

#[test]
fn test_unknown_chunking_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "[diff]\nchunking = \"words\"\n");

    assert!(Settings::from_file(&path).is_err());
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = TempDir::new().unwrap();

    assert!(Settings::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_builder_uses_diff_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "case.toml", "[diff]\nignore_case = true\n");
    let settings = Settings::from_file(&path).unwrap();

    let model = settings
        .builder()
        .build_diff_model("Hostname SW1\n!", "hostname sw1\n!");

    assert!(model.iter().all(|line| line.kind == ChangeKind::Unchanged));
}

const DUPLICATED: &str = "ip access-list extended acl_vlan1
  remark Allow TCP DNS lookups from primary
  permit tcp 172.20.1.0/24 host 8.8.8.8 eq dns
  remark Allow TCP DNS lookups from primary
  permit tcp 172.20.1.0/24 host 8.8.8.8 eq dns
  remark Allow TCP DNS lookups from secondary
  permit tcp 172.20.1.0/24 host 8.8.4.4 eq dns
!";

const DEDUPLICATED: &str = "ip access-list extended acl_vlan1
  remark Allow TCP DNS lookups from primary
  permit tcp 172.20.1.0/24 host 8.8.8.8 eq dns
  remark Allow TCP DNS lookups from secondary
  permit tcp 172.20.1.0/24 host 8.8.4.4 eq dns
!";

#[test]
fn test_builder_uses_acl_settings() {
    let defaults = Settings::new().unwrap();
    let reported = defaults.builder().build_effective(DUPLICATED, DEDUPLICATED);

    assert_eq!(reported.lines()[3].kind, ChangeKind::Deleted);

    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "acl.toml", "[acl]\nignore_removed_duplicate_acls = true\n");
    let settings = Settings::from_file(&path).unwrap();

    assert!(settings.builder().ignore_removed_duplicate_acls());
    let ignored = settings.builder().build_effective(DUPLICATED, DEDUPLICATED);

    assert_eq!(ignored.len(), reported.len());
    assert_eq!(ignored.lines()[3].kind, ChangeKind::Modified);
    assert_eq!(ignored.lines()[3].text, reported.lines()[3].text);
    assert!(ignored.iter().all(|line| line.kind != ChangeKind::Deleted));
}
