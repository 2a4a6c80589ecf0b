//! Integration tests that exercise the compiled `depgate` binary.

use assert_cmd::Command;
use depgate_test_utils::TestTarget;
use predicates::prelude::*;

const EDITOR_ONLY: &str = r#"{ all = [{ kind = "editor" }, { toggle = "includeEditorOnlyDeps" }] }"#;

/// Get a Command for the depgate binary, isolated from the user's global config
fn depgate_cmd(target: &TestTarget) -> Command {
    let mut cmd = Command::cargo_bin("depgate").expect("Failed to find depgate binary");
    cmd.arg("--root")
        .arg(target.root())
        .arg("--global-config")
        .arg(target.global_dir())
        .env_remove("RUST_LOG");
    cmd
}

fn plugin_target() -> TestTarget {
    let target = TestTarget::new();
    target
        .kind("game")
        .name("USemLog")
        .toggle("includeEditorOnlyDeps", true)
        .public_deps(&["Core", "CoreUObject", "Engine"])
        .private_deps(&["MongoC", "UViz"])
        .conditional("SemLogEd", "private", EDITOR_ONLY)
        .flag("SL_WITH_EDITOR_TOOLKIT", "SemLogEd")
        .write();
    target
}

// ============================================================================
// resolve
// ============================================================================

#[test]
fn test_resolve_prints_definitions() {
    let target = plugin_target();
    depgate_cmd(&target)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("SL_WITH_LIBMONGO_C=1\n"))
        .stdout(predicate::str::contains("SL_WITH_DATA_VIS=0\n"))
        .stdout(predicate::str::contains("SL_WITH_EDITOR_TOOLKIT=0\n"));
}

#[test]
fn test_resolve_with_editor_kind_override() {
    let target = plugin_target();
    depgate_cmd(&target)
        .args(["resolve", "--kind", "editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SL_WITH_EDITOR_TOOLKIT=1\n"));
}

#[test]
fn test_resolve_toggle_override_disables_injection() {
    let target = plugin_target();
    depgate_cmd(&target)
        .args(["resolve", "--kind", "editor", "--toggle", "includeEditorOnlyDeps=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SL_WITH_EDITOR_TOOLKIT=0\n"));
}

#[test]
fn test_resolve_compiler_args() {
    let target = plugin_target();
    depgate_cmd(&target)
        .args(["resolve", "--format", "compiler-args"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-DSL_WITH_LIBMONGO_C=1\n"));
}

#[test]
fn test_resolve_json() {
    let target = plugin_target();
    let output = depgate_cmd(&target)
        .args(["resolve", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["SL_WITH_LIBMONGO_C"], 1);
    assert_eq!(json["SL_WITH_EYE_TRACKING"], 0);
    assert_eq!(json.as_object().unwrap().len(), 11);
}

#[test]
fn test_resolve_writes_output_file() {
    let target = plugin_target();
    let out_path = target.root().join("flags.txt");

    depgate_cmd(&target)
        .args(["resolve", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(out_path).unwrap();
    assert!(content.contains("SL_WITH_LIBMONGO_C=1"));
}

#[test]
fn test_resolve_without_manifest_uses_builtin_catalog() {
    let target = TestTarget::new();
    depgate_cmd(&target)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("SL_WITH_JSON=0\n"));
}

#[test]
fn test_resolve_rejects_invalid_flag() {
    let target = TestTarget::new();
    target.manifest().flag("sl_with_bad", "Dep").write();

    depgate_cmd(&target)
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sl_with_bad"));
}

// ============================================================================
// explain / catalog / check
// ============================================================================

#[test]
fn test_explain_lists_missing_dependencies() {
    let target = plugin_target();
    depgate_cmd(&target)
        .arg("explain")
        .assert()
        .success()
        .stdout(predicate::str::contains("SL_WITH_DATA_VIS"))
        .stdout(predicate::str::contains("UMongoQA"));
}

#[test]
fn test_explain_json() {
    let target = plugin_target();
    let output = depgate_cmd(&target)
        .args(["explain", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let data_vis = json
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["flag"] == "SL_WITH_DATA_VIS")
        .unwrap();
    assert_eq!(data_vis["enabled"], false);
    assert_eq!(data_vis["missing"], serde_json::json!(["UMongoQA"]));
}

#[test]
fn test_catalog_lists_builtin_flags() {
    let target = TestTarget::new();
    depgate_cmd(&target)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("SL_WITH_ROSBRIDGE"))
        .stdout(predicate::str::contains("UViz AND UMongoQA"));
}

#[test]
fn test_check_passes_for_valid_manifest() {
    let target = plugin_target();
    depgate_cmd(&target)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_check_fails_without_manifest() {
    let target = TestTarget::new();
    depgate_cmd(&target)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
}
