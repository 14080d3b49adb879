//! The Hosek+17 near-infrared extinction law.
//!
//! The law is derived from the combined Westerlund 1 main-sequence and Arches
//! field red-clump samples (Wd1 age 5 Myr; ages 4-7 Myr give the same law).
//! It is tabulated as `A_lambda / A_Ks` at six wavelengths together with a
//! 1-sigma envelope, and interpolated with not-a-knot cubic splines.
//!
//! The tables extend to 3.545 microns, but the law is only considered valid on
//! `[0.8, 2.2]` microns and queries outside that range are rejected.

use log::debug;
use once_cell::sync::Lazy;

use crate::domain::{Evaluation, LawSeries, Wavelengths};
use crate::error::ExtinctionError;
use crate::math::CubicSpline;

pub const LAW_NAME: &str = "Hosek+17";

/// Central wavelength of the Ks band (microns).
pub const REFERENCE_WAVELENGTH_UM: f64 = 2.14;

/// Smallest wavelength accepted by the evaluator (microns).
pub const MIN_WAVELENGTH_UM: f64 = 0.8;
/// Largest wavelength accepted by the evaluator (microns).
pub const MAX_WAVELENGTH_UM: f64 = 2.2;

/// Knot wavelengths shared by all three curves (microns).
pub const WAVE_KNOTS_UM: [f64; 6] = [0.8059, 0.962, 1.25, 1.53, 2.14, 3.545];

/// `A_lambda / A_Ks` at each knot.
pub const RATIO_CENTRAL: [f64; 6] = [9.66, 6.29, 3.56, 2.33, 1.0, 0.50];
/// Upper 1-sigma bound of `A_lambda / A_Ks`.
pub const RATIO_HIGH: [f64; 6] = [9.98, 6.48, 3.66, 2.39, 1.0, 0.47];
/// Lower 1-sigma bound of `A_lambda / A_Ks`.
pub const RATIO_LOW: [f64; 6] = [9.34, 6.10, 3.46, 2.27, 1.0, 0.53];

static HOSEK17: Lazy<Result<ExtinctionLaw, ExtinctionError>> = Lazy::new(ExtinctionLaw::hosek17);

/// Process-wide Hosek+17 law, built on first use.
pub fn hosek17() -> Result<&'static ExtinctionLaw, ExtinctionError> {
    HOSEK17.as_ref().map_err(Clone::clone)
}

/// Total extinction and 1-sigma error at `wavelengths` for an overall `a_ks`.
///
/// A scalar wavelength yields `Evaluation::Scalar`, a sequence yields
/// `Evaluation::Series` of the same length.
///
/// ```
/// let eval = extlaw::law::extinction(0.5, 1.25).unwrap();
/// let (a_lambda, err) = eval.as_scalar().unwrap();
/// assert!((a_lambda - 1.78).abs() < 1e-9);
/// assert!(err > 0.0);
/// ```
pub fn extinction(a_ks: f64, wavelengths: impl Into<Wavelengths>) -> Result<Evaluation, ExtinctionError> {
    hosek17()?.evaluate(a_ks, wavelengths)
}

/// Central law and both envelope curves, scaled by `A_Ks`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Envelope {
    pub central: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
}

impl Envelope {
    /// Symmetric 1-sigma error: mean of the upper and lower deviations.
    pub fn errors(&self) -> Vec<f64> {
        self.central
            .iter()
            .zip(self.high.iter().zip(self.low.iter()))
            .map(|(&c, (&h, &l))| {
                let err_high = h - c;
                let err_low = c - l;
                (err_high + err_low) / 2.0
            })
            .collect()
    }
}

/// An extinction law with a 1-sigma envelope.
#[derive(Debug, Clone)]
pub struct ExtinctionLaw {
    central: CubicSpline,
    high: CubicSpline,
    low: CubicSpline,
}

impl ExtinctionLaw {
    /// Build the Hosek+17 law from the fixed tables.
    pub fn hosek17() -> Result<Self, ExtinctionError> {
        let law = Self {
            central: fit_curve(&RATIO_CENTRAL, "central")?,
            high: fit_curve(&RATIO_HIGH, "high")?,
            low: fit_curve(&RATIO_LOW, "low")?,
        };
        debug!("built {LAW_NAME} splines over {} knots", WAVE_KNOTS_UM.len());
        Ok(law)
    }

    /// Evaluate at a scalar or a sequence of wavelengths, preserving shape.
    pub fn evaluate(
        &self,
        a_ks: f64,
        wavelengths: impl Into<Wavelengths>,
    ) -> Result<Evaluation, ExtinctionError> {
        let query = wavelengths.into();
        let series = self.evaluate_many(a_ks, query.as_slice())?;
        match query {
            Wavelengths::Scalar(wavelength) => Ok(Evaluation::Scalar {
                wavelength,
                value: series.values[0],
                error: series.errors[0],
            }),
            Wavelengths::Many(_) => Ok(Evaluation::Series(series)),
        }
    }

    /// `(A_lambda, error)` at a single wavelength.
    pub fn evaluate_one(&self, a_ks: f64, wavelength: f64) -> Result<(f64, f64), ExtinctionError> {
        let series = self.evaluate_many(a_ks, std::slice::from_ref(&wavelength))?;
        Ok((series.values[0], series.errors[0]))
    }

    /// `A_lambda` and error at every wavelength in `wavelengths`.
    pub fn evaluate_many(&self, a_ks: f64, wavelengths: &[f64]) -> Result<LawSeries, ExtinctionError> {
        let envelope = self.envelope(a_ks, wavelengths)?;
        let errors = envelope.errors();
        Ok(LawSeries {
            wavelengths: wavelengths.to_vec(),
            values: envelope.central,
            errors,
        })
    }

    /// Central, upper and lower extinction at every wavelength.
    pub fn envelope(&self, a_ks: f64, wavelengths: &[f64]) -> Result<Envelope, ExtinctionError> {
        check_domain(wavelengths)?;

        let scaled = |spline: &CubicSpline| -> Vec<f64> {
            wavelengths.iter().map(|&w| spline.eval(w) * a_ks).collect()
        };

        Ok(Envelope {
            central: scaled(&self.central),
            high: scaled(&self.high),
            low: scaled(&self.low),
        })
    }
}

fn fit_curve(ratios: &[f64], label: &str) -> Result<CubicSpline, ExtinctionError> {
    CubicSpline::not_a_knot(&WAVE_KNOTS_UM, ratios)
        .ok_or_else(|| ExtinctionError::Spline(format!("{label} curve of {LAW_NAME} is not interpolable")))
}

/// Reject the first wavelength outside `[MIN_WAVELENGTH_UM, MAX_WAVELENGTH_UM]`.
///
/// NaN is never inside the range, so it is rejected too.
fn check_domain(wavelengths: &[f64]) -> Result<(), ExtinctionError> {
    match wavelengths
        .iter()
        .find(|w| !(MIN_WAVELENGTH_UM..=MAX_WAVELENGTH_UM).contains(*w))
    {
        Some(&wavelength) => {
            debug!("rejecting wavelength {wavelength} outside [{MIN_WAVELENGTH_UM}, {MAX_WAVELENGTH_UM}]");
            Err(ExtinctionError::OutOfDomain { wavelength })
        }
        None => Ok(()),
    }
}
