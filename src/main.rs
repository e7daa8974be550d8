//! pnov-bridge: PNOV bridge report generator
//!
//! Turns a PNOV CSV export into the pivot tables and copy/paste blocks used
//! in the daily bridge.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pnov_bridge::{
    cli,
    config::{self, AppConfig, ConfigOverrides, ReportRunConfig, Validatable},
    error::PnovError,
    parsers::LoadSource,
    pipeline::exit_codes,
    reports::ReportFormat,
    template::Template,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pnov-bridge")]
#[command(version)]
#[command(about = "Generate PNOV bridge reports from CSV exports", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report written
    1  Input could not be loaded and --fail-on-fallback was set
    2  Error occurred

EXAMPLES:
    # Bridge tables for today's export
    pnov-bridge report pnov.csv

    # Full templated report with owner and ECD
    pnov-bridge report pnov.csv -o full -u jdoe -d 2025-06-30

    # Read from stdin, write JSON to a file
    cat pnov.csv | pnov-bridge report - -o json -O bridge.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// PNOV CSV export (`-` for stdin)
    input: PathBuf,

    /// Report template for the full format
    #[arg(short, long, value_enum)]
    template: Option<Template>,

    /// Report owner printed on the Owner line
    #[arg(short, long)]
    username: Option<String>,

    /// ECD date (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    ecd_date: Option<String>,

    /// Output format [default: bridge]
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Station code printed in the template header
    #[arg(long)]
    station: Option<String>,

    /// Driver-name substring marking platform records
    #[arg(long, env = "PNOV_SENTINEL")]
    sentinel: Option<String>,

    /// Cost at or above which a missing package is high value
    #[arg(long)]
    high_value_threshold: Option<f64>,

    /// Exit with code 1 if the input could not be loaded
    #[arg(long)]
    fail_on_fallback: bool,
}

/// Arguments for the `records` subcommand
#[derive(Parser)]
struct RecordsArgs {
    /// PNOV CSV export (`-` for stdin)
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bridge report from a PNOV export
    Report(ReportArgs),

    /// Print the parsed records as JSON
    Records(RecordsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .pnov-bridge.yaml in the current directory
    Init,
}

impl ReportArgs {
    /// CLI values to layer over the config file.
    fn overrides(&self, quiet: bool) -> ConfigOverrides {
        ConfigOverrides {
            sentinel: self.sentinel.clone(),
            high_value_threshold: self.high_value_threshold,
            format: self.output,
            output_file: self.output_file.clone(),
            template: self.template,
            station: self.station.clone(),
            quiet,
            fail_on_fallback: self.fail_on_fallback,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) if code == exit_codes::SUCCESS => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Report(args) => {
            let (app, loaded_from) = AppConfig::from_file_with_overrides(
                cli.config.as_deref(),
                &args.overrides(cli.quiet),
            );
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            validate(&app)?;

            let config = ReportRunConfig::from_app_config(
                &app,
                LoadSource::from_arg(&args.input),
                args.username,
                args.ecd_date,
            );
            cli::run_report(config)
        }

        Commands::Records(args) => cli::run_records(
            &LoadSource::from_arg(&args.input),
            args.output_file,
            cli.quiet,
        ),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pnov-bridge", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to render schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, cli.config)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Reject invalid merged configuration before any input is read.
fn validate(app: &AppConfig) -> Result<()> {
    let errors = app.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(PnovError::config(message).into())
}

fn run_config_action(action: ConfigAction, explicit: Option<PathBuf>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                dirs::config_dir().map(|p| p.join(config::CONFIG_DIR_NAME)),
                dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".pnov-bridge.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_full_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
