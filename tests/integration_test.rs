use pretty_assertions::assert_eq;
use std::process::Command;

fn protolink(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_protolink"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = protolink(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_resolve_prints_one_line_per_link() {
    let output = protolink(&[
        "resolve",
        "google://test query",
        "info://emacs#Top",
        "unknown://x",
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "http://www.google.com/search?q=test%20query\n(omitted)\nunknown://x\n"
    );
}

#[test]
fn test_cli_browse_dry_run() {
    let output = protolink(&["browse", "--dry-run", "--other-window", "man://printf:3"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "man 3 printf [other window]\n"
    );
}

#[test]
fn test_cli_browse_dry_run_without_handler() {
    let output = protolink(&["browse", "--dry-run", "no link here"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(no handler)\n");
}

#[test]
fn test_cli_list_starts_with_url_marker() {
    let output = protolink(&["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("[uU][rR][lL]:"));
    assert!(stdout.lines().any(|line| line == "google://"));
}

#[test]
fn test_cli_missing_protocol_file_fails() {
    let output = protolink(&["--protocols", "/nonexistent/protolink.toml", "list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
}
