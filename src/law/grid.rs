//! Wavelength grid generation.
//!
//! Grids are inclusive of both ends. Floating-point error in `start + i * step`
//! can land a hair past `stop`, which could then fall outside the law's domain,
//! so every point is clamped to `stop`.

use crate::error::{AppError, EXIT_INPUT};
use crate::law::{MAX_WAVELENGTH_UM, MIN_WAVELENGTH_UM};

/// Default grid step (microns), as used for the reference chart.
pub const DEFAULT_STEP_UM: f64 = 0.1;

/// Points within this fraction of a step of `stop` count as reaching it.
const STEP_SLACK: f64 = 1e-9;

/// Largest number of points a grid may have.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Generate `start, start + step, ...` up to and including `stop`.
pub fn wavelength_grid(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
        return Err(AppError::new(
            EXIT_INPUT,
            format!("Invalid wavelength grid: start={start}, stop={stop}, step={step} (must be finite)."),
        ));
    }
    if step <= 0.0 {
        return Err(AppError::new(EXIT_INPUT, "Wavelength grid step must be > 0."));
    }
    if stop < start {
        return Err(AppError::new(
            EXIT_INPUT,
            format!("Invalid wavelength grid: stop={stop} is below start={start}."),
        ));
    }

    let span = ((stop - start) / step + STEP_SLACK).floor();
    if !span.is_finite() || span >= MAX_GRID_POINTS as f64 {
        return Err(AppError::new(
            EXIT_INPUT,
            format!(
                "Wavelength grid too dense: start={start}, stop={stop}, step={step} \
                 (at most {MAX_GRID_POINTS} points)."
            ),
        ));
    }

    let steps = span as usize;
    let mut out = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        out.push((start + step * i as f64).min(stop));
    }
    Ok(out)
}

/// The full validated domain of the law at the default step.
pub fn default_grid() -> Result<Vec<f64>, AppError> {
    wavelength_grid(MIN_WAVELENGTH_UM, MAX_WAVELENGTH_UM, DEFAULT_STEP_UM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_covers_domain_inclusively() {
        let grid = default_grid().unwrap();
        assert_eq!(grid.len(), 15);
        assert_eq!(grid[0], MIN_WAVELENGTH_UM);
        assert_eq!(grid[grid.len() - 1], MAX_WAVELENGTH_UM);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn stop_at_2_1_gives_fourteen_point_grid() {
        let grid = wavelength_grid(MIN_WAVELENGTH_UM, 2.1, DEFAULT_STEP_UM).unwrap();
        assert_eq!(grid.len(), 14);
        assert!((grid[13] - 2.1).abs() < 1e-12);
    }

    #[test]
    fn stop_off_step_is_not_reached() {
        let grid = wavelength_grid(1.0, 1.25, 0.1).unwrap();
        assert_eq!(grid.len(), 3);
        assert!((grid[2] - 1.2).abs() < 1e-12);
    }

    #[test]
    fn single_point_grid() {
        assert_eq!(wavelength_grid(1.5, 1.5, 0.1).unwrap(), vec![1.5]);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(wavelength_grid(1.0, 2.0, 0.0).is_err());
        assert!(wavelength_grid(2.0, 1.0, 0.1).is_err());
        assert!(wavelength_grid(f64::NAN, 1.0, 0.1).is_err());
    }

    #[test]
    fn rejects_too_dense_grid() {
        let err = wavelength_grid(0.8, 2.2, 1e-300).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT);
        assert!(wavelength_grid(0.0, 1.0, 1e-7).is_err());
        assert_eq!(wavelength_grid(0.0, 1.0, 1e-5).unwrap().len(), 100_001);
    }
}
