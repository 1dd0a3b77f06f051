//! Command-line parsing for the genetic outcome calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the calculation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::InputMode;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "punnett",
    version,
    about = "Autosomal Recessive Genetic Outcome Calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the outcome distribution once and print the worked equations.
    Calc(CalcArgs),
    /// Print an outcome table over an even grid of carrier probabilities.
    Sweep(SweepArgs),
    /// Re-render a previously exported report JSON.
    Show(ShowArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying calculation pipeline as `punnett calc`,
    /// but renders a live pie chart and equation panel using Ratatui.
    Tui(CalcArgs),
}

/// Common options for calculating and for seeding the TUI.
#[derive(Debug, Parser, Clone)]
pub struct CalcArgs {
    /// Input mode. Inferred from --fraction when omitted.
    #[arg(long, value_enum)]
    pub mode: Option<InputMode>,

    /// Parent carrier probability as an integer percentage.
    #[arg(short = 'p', long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub percent: u32,

    /// Parent carrier probability as fraction text (e.g. "1/4").
    #[arg(short = 'f', long)]
    pub fraction: Option<String>,

    /// Render ASCII outcome bars (enabled by default).
    #[arg(long, default_value_t = true)]
    pub bars: bool,

    /// Disable the outcome bars.
    #[arg(long)]
    pub no_bars: bool,

    /// Bar width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Export the computed report to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl CalcArgs {
    /// The effective input mode: explicit flag wins, otherwise fraction mode
    /// when fraction text was supplied.
    pub fn effective_mode(&self) -> InputMode {
        self.mode.unwrap_or(if self.fraction.is_some() {
            InputMode::Fraction
        } else {
            InputMode::Percentage
        })
    }
}

/// Options for the sweep table.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    /// Number of evenly spaced carrier probabilities (including 0 and 1).
    #[arg(long, default_value_t = 11)]
    pub steps: usize,
}

/// Options for re-rendering a saved report.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Report JSON file produced by `punnett calc --export` (or `e` in the TUI).
    #[arg(long, value_name = "JSON")]
    pub report: PathBuf,

    /// Render ASCII outcome bars (enabled by default).
    #[arg(long, default_value_t = true)]
    pub bars: bool,

    /// Disable the outcome bars.
    #[arg(long)]
    pub no_bars: bool,

    /// Bar width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,
}
