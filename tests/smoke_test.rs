/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("pulseglobe"),
        "Help output should mention pulseglobe"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = Command::new("cargo")
        .args(["run", "--", "nonexistent-command"])
        .output()
        .expect("Failed to execute cargo run");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn offline_table_lists_every_connection() {
    let output = Command::new("cargo")
        .args(["run", "--", "table", "--offline", "--seed", "7"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Offline table failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("SERVER"), "Table should start with a header");
    // Two default servers times five sampled cities
    assert_eq!(lines.len(), 11, "Unexpected table:\n{stdout}");
}

#[test]
fn unreachable_source_fails_table_without_panic() {
    let output = Command::new("cargo")
        .args(["run", "--", "table", "--url", "http://127.0.0.1:9/land-points"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success(), "Table without clients should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"), "Fetch failure should not panic");
}
