//! Development tasks: `cargo xtask <task>`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

/// Rewrite rule that sends every path to the app shell.
const DEFAULT_REDIRECTS: &str = "/*    /index.html   200\n";

#[derive(Parser)]
#[command(name = "xtask", about = "folio development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Prepare a static build directory for single-page hosting
    FixBuild {
        /// Build output directory
        #[arg(long, default_value = "dist")]
        dir: PathBuf,
        /// Directory holding a `_redirects` file to copy
        #[arg(long, default_value = "public")]
        public: PathBuf,
    },
    /// Generate man pages from the CLI definition
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::FixBuild { dir, public } => {
            for line in fix_build(&dir, &public)? {
                println!("{}", line);
            }
            Ok(())
        }
        Task::Man { out } => generate_man(&out),
    }
}

/// Copy `index.csr.html` to `index.html` when present, then install a
/// `_redirects` file: the project's own if it has one, the default rule
/// otherwise. Returns what was done.
fn fix_build(dir: &Path, public: &Path) -> Result<Vec<String>> {
    let mut done = Vec::new();
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let csr = dir.join("index.csr.html");
    if csr.exists() {
        fs::copy(&csr, dir.join("index.html"))
            .with_context(|| format!("Failed to copy {}", csr.display()))?;
        done.push("Copied index.csr.html to index.html".to_string());
    }

    let redirects = dir.join("_redirects");
    let source = public.join("_redirects");
    if source.exists() {
        fs::copy(&source, &redirects)
            .with_context(|| format!("Failed to copy {}", source.display()))?;
        done.push(format!("Copied {}", source.display()));
    } else {
        fs::write(&redirects, DEFAULT_REDIRECTS)
            .with_context(|| format!("Failed to write {}", redirects.display()))?;
        done.push("Wrote default _redirects".to_string());
    }
    Ok(done)
}

/// Write `folio.1` and one page per subcommand into `out`.
fn generate_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let command = folio::cli::Cli::command();
    render_page(&command, &out.join("folio.1"))?;

    for sub in command.get_subcommands() {
        render_page(sub, &out.join(format!("folio-{}.1", sub.get_name())))?;
    }
    println!("Man pages written to {}", out.display());
    Ok(())
}

fn render_page(command: &clap::Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
