//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the calculation pipeline
//! - prints reports/bars
//! - writes optional exports
//! - launches the TUI

use clap::Parser;

use crate::cli::{CalcArgs, Command, ShowArgs, SweepArgs};
use crate::domain::{CalcConfig, CarrierInput, FractionInput, InputMode};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `punnett` binary.
pub fn run() -> Result<(), AppError> {
    // We want `punnett` and `punnett -p 50` to behave like `punnett tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Calc(args) => handle_calc(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Show(args) => handle_show(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_calc(args: CalcArgs) -> Result<(), AppError> {
    // One-shot mode validates fraction text strictly; silent NaN output is
    // only useful interactively, where the bad input stays on screen.
    let input = carrier_input_from_args(&args)?;
    let out = pipeline::run_calc(input);

    println!("{}", crate::report::format_run_summary(&out));

    if args.bars && !args.no_bars {
        println!("{}", crate::plot::render_outcome_bars(&out.outcomes, args.width));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_report_json(path, &out)?;
        println!("Wrote report JSON: {}", path.display());
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    println!("{}", crate::report::format_sweep_table(args.steps));
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let report = crate::io::export::read_report_json(&args.report)?;

    println!("{}", crate::report::format_report_summary(&report));

    if args.bars && !args.no_bars {
        println!(
            "{}",
            crate::plot::render_outcome_bars(&report.outcomes, args.width)
        );
    }

    Ok(())
}

fn handle_tui(args: CalcArgs) -> Result<(), AppError> {
    crate::tui::run(calc_config_from_args(&args))
}

/// Strictly resolve the active input from CLI flags.
fn carrier_input_from_args(args: &CalcArgs) -> Result<CarrierInput, AppError> {
    match args.effective_mode() {
        InputMode::Percentage => Ok(CarrierInput::Percentage(args.percent as f64)),
        InputMode::Fraction => {
            let text = args.fraction.as_deref().unwrap_or("1/4");
            Ok(CarrierInput::Fraction(FractionInput::parse(text)?))
        }
    }
}

/// Seed the interactive configuration from CLI flags.
///
/// Unlike `calc`, the TUI keeps the raw fraction text (malformed input is a
/// state the UI must be able to display).
pub fn calc_config_from_args(args: &CalcArgs) -> CalcConfig {
    CalcConfig {
        mode: args.effective_mode(),
        percent: args.percent,
        fraction_text: args.fraction.clone().unwrap_or_else(|| "1/4".to_string()),
    }
}

/// Rewrite argv so `punnett` defaults to `punnett tui`.
///
/// Rules:
/// - `punnett`                     -> `punnett tui`
/// - `punnett -p 50 ...`           -> `punnett tui -p 50 ...`
/// - `punnett --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "calc" | "sweep" | "show" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["punnett"])), argv(&["punnett", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["punnett", "-p", "50"])),
            argv(&["punnett", "tui", "-p", "50"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["punnett", "calc"])),
            argv(&["punnett", "calc"])
        );
        assert_eq!(
            rewrite_args(argv(&["punnett", "show"])),
            argv(&["punnett", "show"])
        );
        assert_eq!(
            rewrite_args(argv(&["punnett", "--help"])),
            argv(&["punnett", "--help"])
        );
    }

    #[test]
    fn strict_input_resolution() {
        let args = crate::cli::CalcArgs {
            mode: None,
            percent: 50,
            fraction: None,
            bars: true,
            no_bars: false,
            width: 40,
            export: None,
        };
        let input = carrier_input_from_args(&args).unwrap();
        assert_eq!(input.probability(), 0.5);

        let args = crate::cli::CalcArgs {
            fraction: Some("1/oops".to_string()),
            ..args
        };
        assert!(carrier_input_from_args(&args).is_err());
    }
}
