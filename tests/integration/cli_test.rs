//! Integration tests for the inspection subcommands

use predicates::prelude::*;

use crate::helpers::Sandbox;

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["profiles", "show", "open", "status", "reset", "config", "completions"] {
        assert!(stdout.contains(name), "missing {} in help", name);
    }
    assert!(stdout.contains("--plain"));
}

#[test]
fn unknown_subcommand_exits_2() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["frobnicate"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("frobnicate"));
}

// ============================================================================
// Profiles and Status Tests
// ============================================================================

#[test]
fn profiles_marks_default_as_active() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("* sujit-dev"))
        .stdout(predicate::str::contains("  mona-qa"))
        .stdout(predicate::str::contains("Monalisha Biswal"));
}

#[test]
fn snapshot_status_with_empty_state() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["status"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Active profile: sujit-developer (default)
    Name: Sujit Kumar Patra
    View: /portfolio-dev
    ");
}

#[test]
fn status_reflects_selection_made_in_terminal() {
    let sandbox = Sandbox::new();
    let (_stdout, _stderr, exit_code) = sandbox.run_with_stdin(&["--plain"], "mona-qa\n");
    assert_eq!(exit_code, 0);

    let (stdout, _stderr, _) = sandbox.run(&["status"]);
    assert!(stdout.contains("Active profile: mona-qa\n"));
    assert!(stdout.contains("View: /portfolio-qa"));
}

#[test]
fn reset_clears_selection() {
    let sandbox = Sandbox::new();
    sandbox.run_with_stdin(&["--plain"], "mona-qa\n");
    assert!(sandbox.state_contents().contains("mona-qa"));

    let (stdout, _stderr, exit_code) = sandbox.run(&["reset"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Active profile cleared."));
    assert!(!sandbox.state_contents().contains("mona-qa"));

    let (stdout, _stderr, _) = sandbox.run(&["status"]);
    assert!(stdout.contains("(default)"));
}

// ============================================================================
// Show Tests
// ============================================================================

#[test]
fn show_accepts_short_key() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["show", "mona-qa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monalisha - QA Portfolio"));
}

#[test]
fn show_does_not_change_selection() {
    let sandbox = Sandbox::new();
    sandbox.run(&["show", "mona-qa"]);

    let (stdout, _stderr, _) = sandbox.run(&["status"]);
    assert!(stdout.contains("sujit-developer (default)"));
}

#[test]
fn show_unknown_key_exits_1() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["show", "bob-qa"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("Available profiles: sujit-dev, mona-qa"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_bash_mentions_binary() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn completions_rejects_unknown_shell() {
    let sandbox = Sandbox::new();
    let (_stdout, _stderr, exit_code) = sandbox.run(&["completions", "tcsh"]);
    assert_eq!(exit_code, 2);
}
