//! Command-line parsing for the extinction law tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the law evaluation code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;
use crate::law::{DEFAULT_STEP_UM, MAX_WAVELENGTH_UM, MIN_WAVELENGTH_UM};
use crate::plot::DEFAULT_CHART_FILE;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "extlaw", version, about = "Hosek+17 near-infrared extinction law")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate A_lambda and its 1-sigma error at the given wavelengths.
    Eval(EvalArgs),
    /// Tabulate the law on an evenly spaced wavelength grid.
    Table(TableArgs),
    /// Plot the law with its 1-sigma band.
    Plot(PlotArgs),
}

/// Output options shared by `eval` and `table`.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Terminal output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Export results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export results (law name, A_Ks and samples) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    /// Overall extinction at Ks (2.14 um), in magnitudes.
    #[arg(long = "aks", allow_negative_numbers = true)]
    pub a_ks: f64,

    /// Wavelengths in microns (0.8 - 2.2).
    #[arg(required = true, num_args = 1..)]
    pub wavelengths: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Wavelength grid options.
#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    /// First grid wavelength (um).
    #[arg(long, default_value_t = MIN_WAVELENGTH_UM)]
    pub start: f64,

    /// Last grid wavelength (um), included when on a step.
    #[arg(long, default_value_t = MAX_WAVELENGTH_UM)]
    pub stop: f64,

    /// Grid step (um).
    #[arg(long, default_value_t = DEFAULT_STEP_UM)]
    pub step: f64,
}

#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    /// Overall extinction at Ks (2.14 um), in magnitudes.
    #[arg(long = "aks", default_value_t = 1.0, allow_negative_numbers = true)]
    pub a_ks: f64,

    #[command(flatten)]
    pub grid: GridArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    /// Overall extinction at Ks (2.14 um), in magnitudes.
    #[arg(long = "aks", default_value_t = 1.0, allow_negative_numbers = true)]
    pub a_ks: f64,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Print an ASCII plot instead of writing a chart file.
    #[arg(long)]
    pub ascii: bool,

    /// Chart file to write.
    #[arg(long, short = 'o', default_value = DEFAULT_CHART_FILE)]
    pub output: PathBuf,

    /// Plot a law JSON produced by `--export-json` instead of evaluating.
    #[arg(long, value_name = "JSON")]
    pub from: Option<PathBuf>,

    /// ASCII plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// ASCII plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_parses_wavelength_list() {
        let cli = Cli::parse_from(["extlaw", "eval", "--aks", "0.5", "1.25", "1.53"]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.a_ks, 0.5);
        assert_eq!(args.wavelengths, vec![1.25, 1.53]);
        assert_eq!(args.output.format, OutputFormat::Text);
    }

    #[test]
    fn plot_defaults_to_reference_grid() {
        let cli = Cli::parse_from(["extlaw", "plot"]);
        let Command::Plot(args) = cli.command else {
            panic!("expected plot");
        };
        assert_eq!(args.a_ks, 1.0);
        assert_eq!(args.grid.start, MIN_WAVELENGTH_UM);
        assert_eq!(args.grid.stop, MAX_WAVELENGTH_UM);
        assert_eq!(args.output, PathBuf::from(DEFAULT_CHART_FILE));
        assert!(!args.ascii);
    }

    #[test]
    fn eval_requires_a_wavelength() {
        assert!(Cli::try_parse_from(["extlaw", "eval", "--aks", "1.0"]).is_err());
    }
}
