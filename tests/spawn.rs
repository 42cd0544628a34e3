#![cfg(unix)]

use app_launcher::process::{LaunchCommand, LaunchOutcome, ProcessRunner, SystemRunner};

fn sh(script: &str, cwd: &std::path::Path) -> LaunchCommand {
    LaunchCommand::new("sh", cwd).args(["-c", script])
}

#[test]
fn clean_exit_is_success() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = SystemRunner.run(&LaunchCommand::new("true", dir.path()));
    assert_eq!(outcome, LaunchOutcome::Success);
}

#[test]
fn child_runs_in_the_given_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let script = format!("test \"$(pwd -P)\" = '{}'", root.display());

    assert_eq!(SystemRunner.run(&sh(&script, &root)), LaunchOutcome::Success);
}

#[test]
fn non_zero_exit_is_reported_with_code() {
    let dir = tempfile::tempdir().unwrap();
    match SystemRunner.run(&sh("exit 3", dir.path())) {
        LaunchOutcome::NonZeroExit { code, detail } => {
            assert_eq!(code, Some(3));
            assert!(detail.contains("non-zero exit status 3"), "{}", detail);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn child_killed_by_interrupt_is_interrupted() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = SystemRunner.run(&sh("kill -s INT $$", dir.path()));
    assert_eq!(outcome, LaunchOutcome::Interrupted);
}

#[test]
fn interrupt_sent_to_launcher_is_survived_and_reported() {
    // The child signals this test process and then exits cleanly itself.
    let dir = tempfile::tempdir().unwrap();
    let outcome = SystemRunner.run(&sh("kill -s INT $PPID; sleep 0.3; exit 0", dir.path()));
    assert_eq!(outcome, LaunchOutcome::Interrupted);

    // The handler is gone again and the next run starts with a clear flag.
    let outcome = SystemRunner.run(&LaunchCommand::new("true", dir.path()));
    assert_eq!(outcome, LaunchOutcome::Success);
}

#[test]
fn missing_runtime_is_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let command = LaunchCommand::new("definitely-not-a-real-runtime-4821", dir.path())
        .args(["-m", "streamlit", "run", "main.py"]);

    match SystemRunner.run(&command) {
        LaunchOutcome::SpawnError(detail) => {
            assert!(detail.contains("definitely-not-a-real-runtime-4821"), "{}", detail);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
