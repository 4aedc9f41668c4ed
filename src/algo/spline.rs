//! Akima spline interpolation for reference-curve fitting.
//!
//! The pipeline fits two one-dimensional curves from tabulated samples: the
//! main-sequence locus in the (B−V, U−B) color-color plane and the absolute
//! V magnitude as a function of B−V. Both are interpolated with an Akima
//! spline, a local cubic interpolant whose derivative at each knot is a
//! slope-weighted average of the neighboring secants. Unlike a global cubic
//! spline it does not overshoot near sharp bends, which matters for the
//! kinked main-sequence curve.
//!
//! Boundary derivatives use quadratic slope extension (two synthetic secants
//! past each end), so any sample count from two upward fits; two samples
//! degenerate to the straight line through both points.

use thiserror::Error;

/// Errors raised when fitting a spline to degenerate sample data.
///
/// Any of these is fatal for a pipeline run: there is no meaningful
/// continuation without a reference curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplineError {
    #[error("x and y sample vectors must have the same length ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("need at least 2 samples to fit a curve, got {0}")]
    TooFewSamples(usize),

    #[error("x samples must be strictly ascending (violated at index {0})")]
    NotAscending(usize),

    #[error("non-finite sample value at index {0}")]
    NonFinite(usize),
}

/// One-dimensional Akima spline over strictly ascending sample abscissas.
///
/// Fit once per reference table and evaluated many times: construction is
/// O(n), evaluation is O(log n) via binary segment search.
///
/// # Out-of-range behavior
///
/// [`AkimaSpline::predict`] is defined for every finite `x`. Outside the
/// fitted interval it clamps to the endpoint ordinates. The intersection
/// search deliberately scans below the fitted range, where the clamped
/// value keeps the reddening-line comparison well defined.
///
/// # Examples
///
/// ```rust
/// use cluster_distance::algo::spline::AkimaSpline;
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 0.5, 1.0, 1.5];
/// let spline = AkimaSpline::fit(&xs, &ys).unwrap();
///
/// // Linear data is reproduced exactly.
/// assert!((spline.predict(1.5) - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct AkimaSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    coeffs: Vec<[f64; 4]>, // a, b, c, d per segment
}

impl AkimaSpline {
    /// Fit a spline through `(xs[i], ys[i])` samples.
    ///
    /// # Arguments
    /// * `xs` - Sample abscissas, strictly ascending
    /// * `ys` - Sample ordinates, one per abscissa
    ///
    /// # Errors
    /// Returns a [`SplineError`] when the vectors differ in length, fewer
    /// than two samples are given, the abscissas are not strictly
    /// ascending, or any value is NaN or infinite.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, SplineError> {
        if xs.len() != ys.len() {
            return Err(SplineError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(SplineError::TooFewSamples(xs.len()));
        }
        for i in 0..xs.len() {
            if !xs[i].is_finite() || !ys[i].is_finite() {
                return Err(SplineError::NonFinite(i));
            }
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(SplineError::NotAscending(i));
            }
        }

        let n = xs.len();
        let mut spline = AkimaSpline {
            x: xs.to_vec(),
            y: ys.to_vec(),
            coeffs: vec![[0.0; 4]; n - 1],
        };
        spline.compute_coefficients();
        Ok(spline)
    }

    /// Compute per-segment cubic Hermite coefficients from Akima knot
    /// derivatives.
    fn compute_coefficients(&mut self) {
        let n = self.x.len();

        // Secant slope of each segment.
        let mut slopes = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            slopes.push((self.y[i + 1] - self.y[i]) / (self.x[i + 1] - self.x[i]));
        }

        if n == 2 {
            // Straight line through both points.
            self.coeffs[0] = [self.y[0], slopes[0], 0.0, 0.0];
            return;
        }

        // Extend the slope sequence by two synthetic secants on each side:
        // ext[i + 2] holds the real slope of segment i.
        let mut ext = vec![0.0; n + 3];
        ext[2..n + 1].copy_from_slice(&slopes);
        ext[1] = 2.0 * ext[2] - ext[3];
        ext[0] = 2.0 * ext[1] - ext[2];
        ext[n + 1] = 2.0 * ext[n] - ext[n - 1];
        ext[n + 2] = 2.0 * ext[n + 1] - ext[n];

        // Akima derivative at each knot: weighted average of the adjacent
        // secants, weights taken from the slope variation one step out.
        let mut deriv = vec![0.0; n];
        for (i, d) in deriv.iter_mut().enumerate() {
            let w_left = (ext[i + 3] - ext[i + 2]).abs();
            let w_right = (ext[i + 1] - ext[i]).abs();
            *d = if w_left + w_right > 0.0 {
                (w_left * ext[i + 1] + w_right * ext[i + 2]) / (w_left + w_right)
            } else {
                // Locally uniform slopes; plain average keeps the line.
                0.5 * (ext[i + 1] + ext[i + 2])
            };
        }

        // Hermite form per segment: a + b*dx + c*dx^2 + d*dx^3.
        for i in 0..n - 1 {
            let h = self.x[i + 1] - self.x[i];
            let s = slopes[i];
            let b = deriv[i];
            let c = (3.0 * s - 2.0 * deriv[i] - deriv[i + 1]) / h;
            let d = (deriv[i] + deriv[i + 1] - 2.0 * s) / (h * h);
            self.coeffs[i] = [self.y[i], b, c, d];
        }
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the fitted interval the endpoint ordinate is returned
    /// (clamping, no extrapolation).
    pub fn predict(&self, x: f64) -> f64 {
        if x <= self.x[0] {
            return self.y[0];
        }
        if x >= self.x[self.x.len() - 1] {
            return self.y[self.y.len() - 1];
        }

        let segment = self.find_segment(x);
        let dx = x - self.x[segment];
        let [a, b, c, d] = self.coeffs[segment];

        a + b * dx + c * dx * dx + d * dx * dx * dx
    }

    /// Lowest fitted abscissa.
    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    /// Highest fitted abscissa.
    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Sample the fitted curve across its domain at a fixed step.
    ///
    /// Used to emit densely interpolated reference curves for plotting.
    pub fn sample(&self, step: f64) -> Vec<(f64, f64)> {
        let x_max = self.max_x();
        let mut out = Vec::new();
        let mut x = self.min_x();
        while x <= x_max {
            out.push((x, self.predict(x)));
            x += step;
        }
        out
    }

    /// Binary search for the segment containing `x`.
    ///
    /// Returns the index of the left endpoint of the containing segment.
    fn find_segment(&self, x: f64) -> usize {
        let mut left = 0;
        let mut right = self.x.len() - 1;

        while left < right - 1 {
            let mid = (left + right) / 2;
            if x < self.x[mid] {
                right = mid;
            } else {
                left = mid;
            }
        }
        left
    }
}
