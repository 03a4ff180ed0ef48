//! varfill CLI entry point.
//!
//! Provides command-line tools for filling placeholders:
//! - `varfill render` - Fill a template from JSON data and parameters
//! - `varfill reset` - Erase path-like placeholders
//! - `varfill check` - Report placeholders the data does not fill

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_render, run_reset, CheckArgs, RenderArgs, ResetArgs};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Placeholder filling tools.
#[derive(Debug, Parser)]
#[command(name = "varfill")]
#[command(about = "Fill {name} placeholders from nested data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill a template's placeholders
    Render(RenderArgs),
    /// Remove path-like placeholders from a template
    Reset(ResetArgs),
    /// Report placeholders left unresolved by the data
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr so rendered output on stdout stays clean.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "varfill=debug" } else { "varfill=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Reset(args) => run_reset(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
