//! Interpolating cubic spline with not-a-knot end conditions.
//!
//! The spline is stored in its second-derivative form: for knots `x_i`, values
//! `y_i` and second derivatives `M_i`, the cubic on `[x_i, x_{i+1}]` is
//!
//! ```text
//! S(x) = a y_i + b y_{i+1} + h^2 / 6 * ((a^3 - a) M_i + (b^3 - b) M_{i+1})
//! a = (x_{i+1} - x) / h,  b = (x - x_i) / h,  h = x_{i+1} - x_i
//! ```
//!
//! Interior rows of the linear system enforce continuity of the first
//! derivative. The two end rows enforce continuity of the third derivative at
//! the second and penultimate knots ("not-a-knot"), which makes the first two
//! and last two segments share a single cubic. This is the same interpolant
//! FITPACK produces for `k = 3, s = 0`.
//!
//! Queries outside the knot range use the polynomial of the nearest end segment.

use nalgebra::{DMatrix, DVector};

/// Minimum number of knots for a not-a-knot cubic.
pub const MIN_KNOTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit the spline through `(x_i, y_i)`.
    ///
    /// Returns `None` if the inputs differ in length, have fewer than
    /// [`MIN_KNOTS`] points, are not strictly increasing in `x`, or the system
    /// cannot be solved.
    pub fn not_a_knot(x: &[f64], y: &[f64]) -> Option<Self> {
        let n = x.len();
        if n != y.len() || n < MIN_KNOTS {
            return None;
        }
        if !x.windows(2).all(|w| w[1] > w[0]) {
            return None;
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);

        a[(0, 0)] = h[1];
        a[(0, 1)] = -(h[0] + h[1]);
        a[(0, 2)] = h[0];

        for i in 1..n - 1 {
            a[(i, i - 1)] = h[i - 1];
            a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            a[(i, i + 1)] = h[i];
            rhs[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        a[(n - 1, n - 3)] = h[n - 2];
        a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
        a[(n - 1, n - 1)] = h[n - 3];

        let m = a.lu().solve(&rhs)?;
        if !m.iter().all(|v| v.is_finite()) {
            return None;
        }

        Some(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m: m.iter().copied().collect(),
        })
    }

    /// Evaluate the spline at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        let n = self.x.len();
        let hi = self.x.partition_point(|&v| v < t).clamp(1, n - 1);
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - t) / h;
        let b = (t - self.x[lo]) / h;

        a * self.y[lo]
            + b * self.y[hi]
            + (h * h / 6.0) * ((a * a * a - a) * self.m[lo] + (b * b * b - b) * self.m[hi])
    }
}
