mod common;

use app_cli::cli::Args;
use app_cli::error::Error;
use app_cli::renderer::MiniJinjaRenderer;
use app_cli::scaffold::{Outcome, Scaffold};
use common::{write, ScriptedPrompter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn args(config_dir: &Path) -> Args {
    Args { config: Some(config_dir.to_path_buf()), ..Default::default() }
}

#[test]
fn test_creates_project() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    let config_dir = cwd.join("cfg");
    write(cwd, "templates/.skip", "node_modules");
    write(cwd, "templates/api/.skip", "^dist");
    write(cwd, "templates/api/dist/bundle.js", "");
    write(cwd, "templates/web [Web]/package.json", "{\"name\": \"{{ projectName }}\"}");
    write(cwd, "templates/web [Web]/node_modules/x.js", "");
    write(cwd, "templates/web [Web]/dist/keep.txt", "dist is excluded catalog-wide");

    let prompter = ScriptedPrompter::new(1, &["My App", "1.0.0", "Jane"]);
    let engine = MiniJinjaRenderer::new();
    let outcome = Scaffold::new(args(&config_dir), cwd).run(&prompter, &engine).unwrap();

    let report = match outcome {
        Outcome::Created(report) => report,
        other => panic!("Expected Created, got {other:?}"),
    };
    let target = cwd.join("my-app");
    assert_eq!(report.target, target);
    assert_eq!(fs::read_to_string(target.join("package.json")).unwrap(), "{\"name\": \"My App\"}");
    assert!(!target.join("node_modules").exists());
    assert!(!target.join("dist").exists());
    assert!(!target.join(".skip").exists());
    assert!(config_dir.join("config.json").exists());
}

#[test]
fn test_config_flags_only_update_config() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    let config_dir = cwd.join("cfg");
    let mut args = args(&config_dir);
    args.author = Some("Jane".to_string());

    let outcome = Scaffold::new(args, cwd)
        .run(&ScriptedPrompter::default(), &MiniJinjaRenderer::new())
        .unwrap();

    match outcome {
        Outcome::ConfigUpdated(path) => assert_eq!(path, config_dir.join("config.json")),
        other => panic!("Expected ConfigUpdated, got {other:?}"),
    }
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config_dir.join("config.json")).unwrap()).unwrap();
    assert_eq!(saved["defaultAuthor"], "Jane");
}

#[test]
fn test_help_and_version_skip_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    let config_dir = cwd.join("cfg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{}").unwrap();

    let mut help = args(&config_dir);
    help.help = true;
    help.app_version = Some("9.9.9".to_string());
    let outcome = Scaffold::new(help, cwd)
        .run(&ScriptedPrompter::default(), &MiniJinjaRenderer::new())
        .unwrap();
    assert!(matches!(outcome, Outcome::Help(text) if text.contains("--app-version")));

    let mut version = args(&config_dir);
    version.version = true;
    let outcome = Scaffold::new(version, cwd)
        .run(&ScriptedPrompter::default(), &MiniJinjaRenderer::new())
        .unwrap();
    assert!(matches!(outcome, Outcome::Version(_)));

    assert_eq!(fs::read_to_string(config_dir.join("config.json")).unwrap(), "{}");
}

#[test]
fn test_missing_template_root() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();

    let err = Scaffold::new(args(&cwd.join("cfg")), cwd)
        .run(&ScriptedPrompter::default(), &MiniJinjaRenderer::new())
        .unwrap_err();

    assert!(matches!(err, Error::TemplatePathError { .. }));
}

#[test]
fn test_empty_template_root() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    write(cwd, "templates/.skip", "");

    let err = Scaffold::new(args(&cwd.join("cfg")), cwd)
        .run(&ScriptedPrompter::default(), &MiniJinjaRenderer::new())
        .unwrap_err();

    assert!(matches!(err, Error::CatalogError(_)));
    assert_eq!(fs::read_dir(cwd).unwrap().count(), 2);
}
