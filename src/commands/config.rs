//! Config subcommands handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};

use folio::config::migrate_config;
use folio::theme::{ansi, current_theme};
use folio::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Open the configuration file in `$EDITOR` (default `vi`).
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }
    Ok(())
}

/// Add fields missing from the config file.
///
/// Shows the additions and asks before writing unless `yes` is set. A
/// missing file is created with every default.
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if !file_exists {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        println!();
        print_diff_preview(&result.content, &[], &[], true);
        println!();

        if !yes && !prompt_confirmation(&format!("Create {}?", config_path.display()))? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, &result.content)?;
        println!("{}", theme.success_text("Config file created successfully."));
        return Ok(());
    }

    let total_fields = result.added_fields.len();
    let total_sections = result.sections_added.len();
    if total_sections > 0 {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("Found {} missing field(s):", total_fields))
        );
    }
    println!();

    print_diff_preview(
        &result.content,
        &result.added_fields,
        &result.sections_added,
        false,
    );
    println!();

    if !yes
        && !prompt_confirmation(&format!(
            "Apply these changes to {}?",
            config_path.display()
        ))?
    {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    fs::write(&config_path, &result.content)?;
    println!("{}", theme.success_text("Config updated successfully."));
    Ok(())
}

/// Lines of `new_content` to show as additions, each paired with whether it
/// is added (`true`) or a context header (`false`).
fn diff_lines<'a>(
    new_content: &'a str,
    added_fields: &[String],
    sections_added: &[String],
    is_new_file: bool,
) -> Vec<(bool, &'a str)> {
    let mut out = Vec::new();
    let mut current_section = String::new();
    let mut pending_header: Option<&str> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].to_string();
            let prefix = format!("{}.", current_section);
            let has_additions = added_fields.iter().any(|f| f.starts_with(&prefix));
            pending_header = (is_new_file || has_additions).then_some(line);
            continue;
        }

        let Some(eq_pos) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq_pos].trim();
        let is_added = added_fields.contains(&format!("{}.{}", current_section, key));

        if is_new_file || is_added {
            if let Some(header) = pending_header.take() {
                let header_added = is_new_file || sections_added.contains(&current_section);
                out.push((header_added, header));
            }
            out.push((true, line));
        }
    }
    out
}

fn print_diff_preview(
    new_content: &str,
    added_fields: &[String],
    sections_added: &[String],
    is_new_file: bool,
) {
    for (added, line) in diff_lines(new_content, added_fields, sections_added, is_new_file) {
        if added {
            println!("{}+ {}{}", ansi::GREEN, line, ansi::RESET);
        } else {
            println!("  {}", line);
        }
    }
}

/// Ask a y/N question. Non-interactive stdin answers no.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
