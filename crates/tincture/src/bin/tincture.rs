//! `tincture` - inspect and validate a design-system configuration.
//!
//! ```text
//! tincture [--config PATH] [--presets DIR] [--format yaml|json] <command>
//!
//!   themes                        resolved theme collection
//!   active --mode light|dark|system
//!                                 the active theme for a display mode
//!   sources                       content files, one per line
//!   check                         resolve everything, print a summary
//! ```
//!
//! Set `RUST_LOG=debug` to trace resolution steps on stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use serde::Serialize;
use tincture::{ConfigStore, DisplayMode};
use tincture_theme::PresetRegistry;
use tracing_subscriber::EnvFilter;

// ============================================================================
// ARGUMENTS
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "tincture", version, about = "Resolve utility-CSS theme configuration")]
struct Cli {
    /// Configuration file (.yaml, .yml or .json)
    #[arg(short, long, default_value = "tincture.yaml", global = true)]
    config: PathBuf,

    /// Directory of extra presets, one YAML file per theme
    #[arg(long, global = true)]
    presets: Option<PathBuf>,

    /// Output format for structured output
    #[arg(short, long, value_enum, default_value_t = Format::Yaml, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved theme collection
    Themes,
    /// Print the active theme for a display mode
    Active {
        #[arg(short, long, default_value_t = DisplayMode::System)]
        mode: DisplayMode,
    },
    /// Print content files, relative to the config directory
    Sources,
    /// Resolve everything and print a one-line summary
    Check,
}

// ============================================================================
// COMMANDS
// ============================================================================

fn run(cli: Cli) -> Result<()> {
    let registry = load_registry(cli.presets.as_deref())?;
    let store = ConfigStore::open(&cli.config, Arc::new(registry))
        .with_context(|| format!("cannot load {}", cli.config.display()))?;
    let config = store.current();

    match cli.command {
        Command::Themes => print_structured(config.themes(), cli.format),
        Command::Active { mode } => {
            let theme = config.active(mode)?;
            print_structured(theme, cli.format)
        }
        Command::Sources => {
            let sources = store.scan_sources()?;
            for path in sources.relative_paths() {
                println!("{path}");
            }
            Ok(())
        }
        Command::Check => {
            let sources = store.scan_sources()?;
            println!(
                "{} {} themes (dark: {}), {} fallbacks, {} font roles, {} content files",
                style("ok:").green().bold(),
                config.themes().len(),
                config.dark_theme(),
                config.fallbacks().len(),
                config.fonts().len(),
                sources.len(),
            );
            Ok(())
        }
    }
}

fn load_registry(presets: Option<&std::path::Path>) -> Result<PresetRegistry> {
    let mut registry = PresetRegistry::builtin();
    if let Some(dir) = presets {
        registry
            .add_dir(dir)
            .with_context(|| format!("cannot load presets from {}", dir.display()))?;
    }
    Ok(registry)
}

fn print_structured<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<()> {
    let text = match format {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => serde_json::to_string_pretty(value)? + "\n",
    };
    print!("{text}");
    Ok(())
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
