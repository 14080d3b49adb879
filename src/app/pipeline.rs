//! Shared "evaluate law" logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! wavelengths -> domain check -> spline evaluation -> portable law file
//!
//! The subcommands can then focus on presentation (printing, exports, plots).

use log::{debug, info};

use crate::domain::{LawFile, PlotConfig};
use crate::error::AppError;
use crate::io::{law_file, read_law_json};
use crate::law::hosek17;

/// Evaluate the law at `wavelengths` and wrap the result for output.
pub fn run_eval(a_ks: f64, wavelengths: &[f64]) -> Result<LawFile, AppError> {
    debug!("evaluating A_Ks={a_ks} at {} wavelengths", wavelengths.len());
    let series = hosek17()?.evaluate_many(a_ks, wavelengths)?;
    Ok(law_file(a_ks, &series))
}

/// Samples to plot: a previously exported law file, or a fresh evaluation.
pub fn plot_samples(config: &PlotConfig) -> Result<LawFile, AppError> {
    match &config.from {
        Some(path) => {
            let law = read_law_json(path)?;
            info!("loaded {} samples from {}", law.samples.len(), path.display());
            Ok(law)
        }
        None => run_eval(config.a_ks, &config.wavelengths),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_eval_scales_by_a_ks() {
        let law = run_eval(2.0, &[2.14]).unwrap();
        assert_eq!(law.samples.len(), 1);
        assert!((law.samples[0].a_lambda - 2.0).abs() < 1e-9);
    }

    #[test]
    fn run_eval_maps_domain_errors_to_exit_code() {
        let err = run_eval(1.0, &[2.5]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_DOMAIN);
    }
}
