//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves them into plain config structs
//! - evaluates the law
//! - prints tables/plots
//! - writes optional exports

use clap::Parser;
use log::info;

use crate::cli::{Command, EvalArgs, GridArgs, OutputArgs, PlotArgs, TableArgs};
use crate::domain::{EvalConfig, PlotConfig};
use crate::error::AppError;
use crate::law::wavelength_grid;

pub mod pipeline;

/// Entry point for the `extlaw` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Eval(args) => handle_eval(eval_config_from_args(&args)),
        Command::Table(args) => handle_eval(table_config_from_args(&args)?),
        Command::Plot(args) => handle_plot(plot_config_from_args(&args)?),
    }
}

fn handle_eval(config: EvalConfig) -> Result<(), AppError> {
    let law = pipeline::run_eval(config.a_ks, &config.wavelengths)?;

    let out = crate::report::format_output(&law, config.format)?;
    print!("{out}");

    if let Some(path) = &config.export_csv {
        crate::io::write_results_csv(path, &law.samples)?;
        info!("exported CSV to {}", path.display());
    }
    if let Some(path) = &config.export_json {
        crate::io::write_law_json(path, &law)?;
        info!("exported law JSON to {}", path.display());
    }

    Ok(())
}

fn handle_plot(config: PlotConfig) -> Result<(), AppError> {
    let law = pipeline::plot_samples(&config)?;

    if config.ascii {
        let plot = crate::plot::render_ascii_plot(&law.samples, config.width, config.height);
        println!("{plot}");
        return Ok(());
    }

    crate::plot::write_svg(&config.output, &law.samples)?;
    println!("Wrote {}", config.output.display());
    Ok(())
}

pub fn eval_config_from_args(args: &EvalArgs) -> EvalConfig {
    config_with_output(args.a_ks, args.wavelengths.clone(), &args.output)
}

pub fn table_config_from_args(args: &TableArgs) -> Result<EvalConfig, AppError> {
    let wavelengths = grid_from_args(&args.grid)?;
    Ok(config_with_output(args.a_ks, wavelengths, &args.output))
}

pub fn plot_config_from_args(args: &PlotArgs) -> Result<PlotConfig, AppError> {
    let wavelengths = grid_from_args(&args.grid)?;
    Ok(PlotConfig {
        a_ks: args.a_ks,
        wavelengths,
        ascii: args.ascii,
        output: args.output.clone(),
        from: args.from.clone(),
        width: args.width,
        height: args.height,
    })
}

fn grid_from_args(args: &GridArgs) -> Result<Vec<f64>, AppError> {
    let grid = wavelength_grid(args.start, args.stop, args.step)?;
    info!(
        "wavelength grid: {} points in [{}, {}] step {}",
        grid.len(),
        args.start,
        args.stop,
        args.step
    );
    Ok(grid)
}

fn config_with_output(a_ks: f64, wavelengths: Vec<f64>, output: &OutputArgs) -> EvalConfig {
    EvalConfig {
        a_ks,
        wavelengths,
        format: output.format,
        export_csv: output.export.clone(),
        export_json: output.export_json.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    #[test]
    fn table_config_builds_inclusive_grid() {
        let cli = Cli::parse_from(["extlaw", "table", "--start", "1.0", "--stop", "2.0", "--step", "0.25"]);
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        let config = table_config_from_args(&args).unwrap();
        assert_eq!(config.wavelengths, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert_eq!(config.a_ks, 1.0);
    }

    #[test]
    fn invalid_grid_is_an_input_error() {
        let cli = Cli::parse_from(["extlaw", "plot", "--step", "0"]);
        let Command::Plot(args) = cli.command else {
            panic!("expected plot");
        };
        let err = plot_config_from_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
