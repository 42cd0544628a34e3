#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output};

fn run_app(script_dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_run-app"))
        .arg("-C")
        .arg(script_dir)
        .args(extra)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn project(with_entry: bool, with_requirements: bool) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("project-root");
    std::fs::create_dir(&root).unwrap();
    if with_entry {
        std::fs::write(root.join("main.py"), "").unwrap();
    }
    if with_requirements {
        std::fs::write(root.join("requirements.txt"), "").unwrap();
    }
    dir
}

#[test]
fn missing_project_root_exits_with_hint() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_app(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("❌ Error: project-root directory not found!"), "{}", out);
    assert!(out.contains("Please ensure you're running this from the correct location."));
    assert!(!out.contains("Starting"));
}

#[test]
fn missing_entry_file_exits_naming_it() {
    let dir = project(false, true);
    let output = run_app(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("❌ Error: main.py not found in project-root directory!"), "{}", out);
    assert!(!out.contains("Starting"));
}

#[test]
fn missing_requirements_file_exits_naming_it() {
    let dir = project(true, false);
    let output = run_app(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(
        out.contains("❌ Error: requirements.txt not found in project-root directory!"),
        "{}",
        out
    );
    assert!(!out.contains("Starting"));
}

#[test]
fn clean_run_prints_banner_and_exits_zero() {
    let dir = project(true, true);
    // `true` ignores `-m streamlit run main.py` and exits 0.
    let output = run_app(dir.path(), &["--runtime", "true"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("🚀 Starting Credit Risk Modeling Application..."), "{}", out);
    assert!(out.contains(&"-".repeat(50)));
    assert!(!out.contains("❌"));
}

#[test]
fn failing_application_is_reported_without_failing_the_launcher() {
    let dir = project(true, true);
    let output = run_app(dir.path(), &["--runtime", "false"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("❌ Error running application:"), "{}", out);
    assert!(out.contains("pip install -r project-root/requirements.txt"));
}
