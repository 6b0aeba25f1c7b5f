//! obelus: structural checks for directories of markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use obelus::report::{ExitStatus, Report};
use obelus::validate::{Rule, RuleSet};
use obelus::{check, config, logging};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Failing documents and a summary line
    Human,
    /// The full report as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "obelus")]
#[command(about = "Structural checks for directories of markdown documents", long_about = None)]
struct Args {
    /// Directory to check
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Rules to enforce, replacing the configured set
    #[arg(long, short = 'r', value_name = "RULE")]
    rule: Vec<Rule>,

    /// Enforce every rule
    #[arg(long, conflicts_with = "rule")]
    all_rules: bool,

    /// Descend into hidden files and directories
    #[arg(long)]
    include_hidden: bool,

    /// Follow symbolic links
    #[arg(long)]
    follow_links: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Load configuration from this file instead of obelus.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            debug!(?err, "check aborted");
            eprintln!("obelus: {err}");
            ExitCode::from(ExitStatus::Unreadable.code())
        }
    }
}

fn run(args: Args) -> Result<ExitStatus, Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load(args.config.as_deref())?;

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if args.include_hidden {
        cfg.include_hidden = true;
    }
    if args.follow_links {
        cfg.follow_links = true;
    }

    let rules = if args.all_rules {
        RuleSet::all()
    } else if args.rule.is_empty() {
        cfg.rule_set()?
    } else {
        args.rule.into_iter().collect()
    };

    let report = check::check_with(&args.root, &cfg, rules)?;
    print_report(&report, args.format)?;
    Ok(report.exit_status())
}

fn print_report(report: &Report, format: Format) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        Format::Human => report.write_human(&mut stdout)?,
        Format::Json => {
            let json = report.to_json().map_err(io::Error::other)?;
            writeln!(stdout, "{json}")?;
        }
    }
    stdout.flush()
}
