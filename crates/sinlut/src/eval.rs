//! Per-query evaluation records: approximations paired with the exact sine
//! and error metrics.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::table::{BuildError, LookupTable, SkewStrategy};

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Relative error is reported as absent when `|exact|` is at or below this
/// threshold.
///
/// Mathematically relative error is undefined only at `exact == 0`, but the
/// float sine of the k-th multiple of π is a residue of roughly `k · 1.2e−16`
/// rather than zero. The threshold sits far above that residue and far below
/// any meaningful sine magnitude, so zero crossings report absent instead of
/// a ratio of rounding noise.
pub const RELATIVE_ERROR_ZERO_THRESHOLD: f64 = 1e-12;

/// Outcome of evaluating one query angle against both tables.
///
/// `error = exact − approx`; `relative_error = error / exact`. Absent fields
/// mean the corresponding lookup was unavailable, or (for relative error)
/// that the exact value is a zero crossing. Absence is always `None`, never
/// NaN or infinity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvaluationResult {
    /// Query angle reported back in degrees for display.
    pub angle_degrees: f64,
    /// Ground-truth sine of the query angle.
    pub exact: f64,
    /// Approximation from the equally spaced table.
    pub approx_equal_spacing: Option<f64>,
    /// Approximation from the skewed table.
    pub approx_skewed: Option<f64>,
    /// `exact − approx` for the equally spaced table.
    pub error_equal_spacing: Option<f64>,
    /// `exact − approx` for the skewed table.
    pub error_skewed: Option<f64>,
    /// `error / exact` for the equally spaced table.
    pub relative_error_equal_spacing: Option<f64>,
    /// `error / exact` for the skewed table.
    pub relative_error_skewed: Option<f64>,
}

/// The equally spaced and skewed tables built from one size selection.
///
/// Rebuilt whenever the sample count changes; holds no other state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TablePair {
    /// Equally spaced table over `[0, π/2]`.
    pub equal: LookupTable,
    /// Skewed table over the same domain.
    pub skewed: LookupTable,
}

impl TablePair {
    /// Builds both tables for `n` samples; `strategy` picks the skewed grid.
    pub fn build(n: usize, strategy: SkewStrategy) -> Result<Self, BuildError> {
        Ok(Self {
            equal: LookupTable::equal_spaced(n)?,
            skewed: LookupTable::skewed(n, strategy)?,
        })
    }

    /// Evaluates one query angle (radians) against both tables.
    pub fn evaluate(&self, angle: f64) -> EvaluationResult {
        let exact = libm::sin(angle);
        let approx_equal_spacing = self.equal.evaluate(angle);
        let approx_skewed = self.skewed.evaluate(angle);
        let (error_equal_spacing, relative_error_equal_spacing) =
            error_metrics(exact, approx_equal_spacing);
        let (error_skewed, relative_error_skewed) = error_metrics(exact, approx_skewed);
        EvaluationResult {
            angle_degrees: radians_to_degrees(angle),
            exact,
            approx_equal_spacing,
            approx_skewed,
            error_equal_spacing,
            error_skewed,
            relative_error_equal_spacing,
            relative_error_skewed,
        }
    }

    /// Evaluates a batch of query angles (radians), one record per query,
    /// in input order.
    pub fn evaluate_all<I>(&self, angles: I) -> Vec<EvaluationResult>
    where
        I: IntoIterator<Item = f64>,
    {
        angles.into_iter().map(|a| self.evaluate(a)).collect()
    }
}

/// `(error, relative_error)` for one approximation.
///
/// Both are absent when the approximation is; relative error is additionally
/// absent at zero crossings so a missing comparator never turns into a
/// division fault.
fn error_metrics(exact: f64, approx: Option<f64>) -> (Option<f64>, Option<f64>) {
    let error = approx.map(|a| exact - a);
    // libm::fabs: f64::abs is not available in core on the supported rustc.
    let relative = if libm::fabs(exact) <= RELATIVE_ERROR_ZERO_THRESHOLD {
        None
    } else {
        error.map(|e| e / exact)
    };
    (error, relative)
}
