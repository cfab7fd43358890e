//! Integration tests for the config subcommands

use crate::helpers::Sandbox;

#[test]
fn config_show_prints_defaults() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[terminal]"));
    assert!(stdout.contains("typing_delay_ms = 50"));
    assert!(stdout.contains("[server_log]"));
}

#[test]
fn config_show_reads_user_file() {
    let sandbox = Sandbox::new();
    let path = sandbox.config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[terminal]\ntyping_delay_ms = 5\n").unwrap();

    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("typing_delay_ms = 5\n"));
}

#[test]
fn invalid_config_fails_with_path() {
    let sandbox = Sandbox::new();
    let path = sandbox.config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[terminal\n").unwrap();

    let (_stdout, stderr, exit_code) = sandbox.run(&["status"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to load config"));
}

// ============================================================================
// Migrate Tests
// ============================================================================

#[test]
fn migrate_creates_missing_file() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config file created successfully."));
    let written = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(written.contains("[terminal]"));
    assert!(written.contains("[logging]"));
}

#[test]
fn migrate_keeps_user_values_and_comments() {
    let sandbox = Sandbox::new();
    let path = sandbox.config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "# mine\n[terminal]\ntyping_delay_ms = 5\n").unwrap();

    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate", "-y"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config updated successfully."));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# mine\n"));
    assert!(written.contains("typing_delay_ms = 5"));
    assert!(written.contains("history_limit = 100"));

    let (stdout, _stderr, _) = sandbox.run(&["config", "migrate", "-y"]);
    assert!(stdout.contains("Config is already up to date."));
}

#[test]
fn migrate_without_yes_on_piped_stdin_changes_nothing() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made."));
    assert!(!sandbox.config_path().exists());
}
