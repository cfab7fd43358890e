//! Integration tests for the landing terminal in plain mode

use crate::helpers::Sandbox;

// ============================================================================
// Profile Loading Tests
// ============================================================================

#[test]
fn loading_qa_profile_opens_its_page() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run_with_stdin(&["--plain"], "mona-qa\n\n");

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Welcome to Portfolio Terminal v2.0\n"));
    assert!(stdout.contains("$ mona-qa\n"));
    assert!(stdout.contains("Name: Monalisha Biswal"));
    assert!(stdout.contains("Navigating to portfolio page...\n/portfolio-qa\n"));
    assert!(sandbox.state_contents().contains("mona-qa"));
}

#[test]
fn piped_stdin_selects_plain_mode() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run_with_stdin(&[], "help\n");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Available commands:"));
}

#[test]
fn unknown_profile_is_reported_and_not_loaded() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run_with_stdin(&["--plain"], "bob-qa\n");

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Error: Portfolio not found for bob-qa"));
    assert!(!sandbox.state_contents().contains("bob-qa"));
}

#[test]
fn terminal_start_forgets_previous_selection() {
    let sandbox = Sandbox::new();
    sandbox.run_with_stdin(&["--plain"], "mona-qa\n");
    assert!(sandbox.state_contents().contains("mona-qa"));

    sandbox.run_with_stdin(&["--plain"], "");
    assert!(!sandbox.state_contents().contains("mona-qa"));
}

// ============================================================================
// Open Tests
// ============================================================================

#[test]
fn open_page_path_prints_page() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--plain", "open", "/portfolio-dev"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("/portfolio-dev\n"));
    assert!(stdout.contains("Sujit Kumar Patra"));
}

#[test]
fn open_unknown_path_starts_terminal() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--plain", "open", "/nowhere"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Welcome to Portfolio Terminal v2.0\n"));
}
