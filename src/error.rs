//! Error types.
//!
//! - `ExtinctionError` is what the library surfaces to callers of the law.
//! - `AppError` is what the `extlaw` binary reports (message + exit code).

use crate::law::{MAX_WAVELENGTH_UM, MIN_WAVELENGTH_UM};

/// Exit code for invalid arguments and I/O failures.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for wavelengths outside the domain of the law.
pub const EXIT_DOMAIN: u8 = 3;
/// Exit code for chart rendering failures.
pub const EXIT_RENDER: u8 = 4;
/// Exit code for a calibration curve that cannot be interpolated.
pub const EXIT_LAW: u8 = 5;

/// Failure while evaluating the extinction law.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtinctionError {
    /// A requested wavelength lies outside `[0.8, 2.2]` microns.
    OutOfDomain { wavelength: f64 },
    /// The spline system for a calibration curve could not be solved.
    Spline(String),
}

impl std::fmt::Display for ExtinctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfDomain { wavelength } => write!(
                f,
                "Extinction law not defined at wavelength {wavelength} microns. \
                 Please select value between {MIN_WAVELENGTH_UM} - {MAX_WAVELENGTH_UM} microns"
            ),
            Self::Spline(msg) => write!(f, "Spline construction failed: {msg}"),
        }
    }
}

impl std::error::Error for ExtinctionError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ExtinctionError> for AppError {
    fn from(err: ExtinctionError) -> Self {
        let code = match err {
            ExtinctionError::OutOfDomain { .. } => EXIT_DOMAIN,
            ExtinctionError::Spline(_) => EXIT_LAW,
        };
        AppError::new(code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_domain_message_names_valid_range() {
        let msg = ExtinctionError::OutOfDomain { wavelength: 2.5 }.to_string();
        assert!(msg.contains("0.8 - 2.2 microns"), "got: {msg}");
        assert!(msg.contains("2.5"));
    }

    #[test]
    fn domain_errors_map_to_domain_exit_code() {
        let app: AppError = ExtinctionError::OutOfDomain { wavelength: 0.1 }.into();
        assert_eq!(app.exit_code(), EXIT_DOMAIN);
    }

    #[test]
    fn spline_errors_map_to_law_exit_code() {
        let app: AppError = ExtinctionError::Spline("central curve".to_string()).into();
        assert_eq!(app.exit_code(), EXIT_LAW);
        assert!(app.to_string().contains("central curve"));
    }
}
