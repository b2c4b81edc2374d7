//! Command-line entry point for synchronizing translation files.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use transync::commands::{self, Workspace};

/// Command-line options for transync.
#[derive(Parser)]
#[command(
    name = "transync",
    version,
    about = "Keep per-language translation files in step with a translation schema"
)]
struct Cli {
    /// Extra transync.json5 files applied on top of discovered config (repeatable)
    #[arg(long, global = true)]
    config: Vec<PathBuf>,
    /// Directory to resolve config from (defaults to the current directory)
    #[arg(long, global = true)]
    cwd: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write every language file from the schema (the default command)
    Sync {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Only process these languages
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,
    },
    /// Fail if any language file is out of date
    Check,
    /// Print the derived translation key paths
    Keys {
        /// Print the key-path tree as JSON instead of one path per line
        #[arg(long)]
        tree: bool,
    },
    /// List configured languages
    Languages,
}

fn main() -> anyhow::Result<ExitCode> {
    transync::init_logging();

    let cli = Cli::parse();
    let cwd = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("failed to resolve current working directory")?,
    };
    info!(
        "starting transync (cwd={}, runtime_layers={})",
        cwd.display(),
        cli.config.len()
    );
    let workspace = Workspace::load(&cwd, &cli.config)?;

    let command = cli.command.unwrap_or(Command::Sync {
        dry_run: false,
        languages: Vec::new(),
    });
    match command {
        Command::Sync { dry_run, languages } => {
            let report = workspace.sync(&languages, dry_run)?;
            print!("{}", commands::render_report(&report, dry_run));
            Ok(exit_code(report.is_success()))
        }
        Command::Check => {
            let report = workspace.sync(&[], true)?;
            print!("{}", commands::render_report(&report, true));
            let stale = report.changed().count();
            if stale > 0 {
                eprintln!("{stale} translation file(s) out of date; run `transync sync`");
            }
            Ok(exit_code(report.is_success() && stale == 0))
        }
        Command::Keys { tree } => {
            let schema = workspace.schema()?;
            print!("{}", commands::render_keys(&schema, tree)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Languages => {
            print!("{}", commands::render_languages(&workspace.config));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
