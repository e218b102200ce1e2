// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcagcheck CLI - WCAG/BFSG accessibility checker for HTML.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wcagcheck::report::{generate_report, OutputFormat};
use wcagcheck::scanner::{self, FileReport};
use wcagcheck::{load_config, CheckerConfig, WcagLevel};

/// WCAG/BFSG accessibility checker for HTML documents
#[derive(Parser)]
#[command(name = "wcagcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks on a directory of HTML files
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// WCAG conformance level
        #[arg(long, default_value = "aa")]
        level: WcagLevelArg,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Configuration file (YAML)
        #[arg(long, default_value = "wcagcheck.yml")]
        config: PathBuf,

        /// Disable a named check (repeatable)
        #[arg(long, value_name = "CHECK")]
        disable: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze a single HTML file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// WCAG conformance level
        #[arg(long, default_value = "aa")]
        level: WcagLevelArg,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Configuration file (YAML)
        #[arg(long, default_value = "wcagcheck.yml")]
        config: PathBuf,

        /// Disable a named check (repeatable)
        #[arg(long, value_name = "CHECK")]
        disable: Vec<String>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// WCAG conformance level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum WcagLevelArg {
    /// Level A - minimum
    A,
    /// Level AA - standard (BFSG baseline)
    Aa,
    /// Level AAA - enhanced
    Aaa,
}

impl From<WcagLevelArg> for WcagLevel {
    fn from(arg: WcagLevelArg) -> Self {
        match arg {
            WcagLevelArg::A => WcagLevel::A,
            WcagLevelArg::Aa => WcagLevel::AA,
            WcagLevelArg::Aaa => WcagLevel::AAA,
        }
    }
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wcagcheck=debug")
    } else {
        EnvFilter::new("wcagcheck=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_config(
    path: &std::path::Path,
    level: WcagLevelArg,
    disable: &[String],
) -> anyhow::Result<CheckerConfig> {
    let mut config = load_config(path)?;
    config.compliance_level = level.into();
    for name in disable {
        if !config.disable(name) {
            anyhow::bail!("unknown check name: {}", name);
        }
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            dir,
            level,
            format,
            config,
            disable,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let config = build_config(&config, level, &disable)?;
            let reports = scanner::scan_directory(&dir, &config)?;
            let report = render_reports(&reports, format.into())?;
            write_output(&report, output.as_deref())?;

            if reports.iter().any(|r| r.result.has_errors()) {
                std::process::exit(1);
            }
        }

        Commands::Analyze {
            file,
            level,
            format,
            config,
            disable,
            verbose,
        } => {
            init_logging(verbose);
            let config = build_config(&config, level, &disable)?;
            let report = scanner::scan_file(&file, &config)?;
            println!("{}", generate_report(&report.result, format.into()));

            if report.result.has_errors() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Render per-file reports for a directory scan.
fn render_reports(reports: &[FileReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => {
            let mut output = String::new();
            for report in reports {
                output.push_str(&format!("== {} ==\n", report.path.display()));
                output.push_str(&generate_report(&report.result, OutputFormat::Text));
                output.push('\n');
            }
            if reports.is_empty() {
                output.push_str("No HTML files found.\n");
            }
            Ok(output)
        }
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
