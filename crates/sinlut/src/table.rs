//! Lookup table construction: equal-spacing and skewed sample grids.
//!
//! Tables are built once per sample-count selection and are immutable
//! afterwards. Values are the exact sine of each sample angle (`libm::sin`),
//! never themselves interpolated, so interpolation error is zero at every
//! node.

use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;
use core::fmt;

/// Structural minimum number of samples in a table.
///
/// Two samples are the least that admit a bracketing pair. Front-end policy
/// ranges (the reference tool uses 5–1000) are the caller's concern.
pub const MIN_SAMPLES: usize = 2;

/// Default exponent for [`SkewStrategy::PowerLaw`].
///
/// The warp `θ = t^(1/p) · π/2` with `p = 1.5` equidistributes the
/// `h² · |sin″|` linear-interpolation error across intervals. Larger
/// exponents (the sqrt warp `p = 2` included) over-thin the low-curvature
/// end near 0 and lose to equal spacing on maximum error.
pub const DEFAULT_POWER_LAW_EXPONENT: f64 = 1.5;

// ============================================================================
// Errors
// ============================================================================

/// Failure to construct a valid lookup table.
///
/// Construction failures are always reported to the caller; a degenerate
/// grid is never silently substituted with a fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildError {
    /// Fewer samples than [`MIN_SAMPLES`] were requested or survived
    /// grid generation.
    TooFewSamples {
        /// Number of samples requested (or surviving filtering).
        actual: usize,
        /// The structural minimum, [`MIN_SAMPLES`].
        minimum: usize,
    },
    /// The skewed grid degenerated (e.g. no positive curvature weight).
    DegenerateSkew {
        /// What degenerated.
        reason: &'static str,
    },
    /// The power-law exponent is not a finite positive number.
    InvalidExponent {
        /// The offending exponent.
        exponent: f64,
    },
    /// A generated grid is not strictly increasing.
    NonIncreasing {
        /// Index of the first sample not greater than its predecessor.
        index: usize,
    },
    /// A generated grid does not start at 0 or has a non-finite bound.
    DomainMismatch {
        /// First angle of the offending grid.
        first: f64,
        /// Last angle of the offending grid.
        last: f64,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSamples { actual, minimum } => {
                write!(f, "table needs at least {minimum} samples, got {actual}")
            }
            Self::DegenerateSkew { reason } => {
                write!(f, "skewed grid degenerated: {reason}")
            }
            Self::InvalidExponent { exponent } => {
                write!(f, "power-law exponent must be finite and positive, got {exponent}")
            }
            Self::NonIncreasing { index } => {
                write!(f, "grid is not strictly increasing at index {index}")
            }
            Self::DomainMismatch { first, last } => {
                write!(f, "grid must span [0, bound] with a finite bound, got [{first}, {last}]")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

// ============================================================================
// Skew strategies
// ============================================================================

/// How the skewed table places its samples over `[0, π/2]`.
///
/// The source material contains two divergent constructions under the same
/// name; both are exposed so the caller picks rather than the library
/// guessing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SkewStrategy {
    /// Data-dependent grid driven by the second derivative of sine on the
    /// equal grid.
    ///
    /// Interior weights are `w_i = d2_i · (d2_{i+1} − d2_i)` with
    /// central-difference `d2` and zero boundary weights; weights are
    /// normalized by the maximum, negative ones discarded, and the rest
    /// sorted and scaled to angles. Output length is data-dependent
    /// (at most N) and the build fails if fewer than two samples survive.
    CurvatureWeighted,
    /// Deterministic warp `θ_i = (i/(N−1))^(1/exponent) · π/2`.
    ///
    /// Always yields exactly N strictly increasing samples, denser toward
    /// π/2 for `exponent > 1`.
    PowerLaw {
        /// Warp exponent `p`; see [`DEFAULT_POWER_LAW_EXPONENT`].
        exponent: f64,
    },
}

impl Default for SkewStrategy {
    fn default() -> Self {
        Self::PowerLaw {
            exponent: DEFAULT_POWER_LAW_EXPONENT,
        }
    }
}

// ============================================================================
// LookupTable
// ============================================================================

/// Immutable table of `(angle, sin(angle))` samples over one quadrant.
///
/// Invariants, validated at construction: at least [`MIN_SAMPLES`] samples,
/// first angle exactly 0, angles strictly increasing, finite domain bound.
/// The bound (the last angle, nominally π/2) is carried as an explicit
/// attribute: folding in [`evaluate`](LookupTable::evaluate) derives the
/// period from it, never from a hardcoded constant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LookupTable {
    pub(crate) angles: Vec<f64>,
    pub(crate) values: Vec<f64>,
    pub(crate) bound: f64,
}

impl LookupTable {
    /// Builds a table of `n` equally spaced samples over `[0, π/2]`,
    /// both endpoints included.
    pub fn equal_spaced(n: usize) -> Result<Self, BuildError> {
        check_sample_count(n)?;
        let last = (n - 1) as f64;
        let angles = (0..n).map(|i| i as f64 / last * FRAC_PI_2).collect();
        Self::from_angles(angles)
    }

    /// Builds a table of samples skewed toward the high-error region of
    /// `[0, π/2]`, placed by `strategy`.
    pub fn skewed(n: usize, strategy: SkewStrategy) -> Result<Self, BuildError> {
        check_sample_count(n)?;
        let angles = match strategy {
            SkewStrategy::CurvatureWeighted => curvature_weighted_grid(n)?,
            SkewStrategy::PowerLaw { exponent } => power_law_grid(n, exponent)?,
        };
        Self::from_angles(angles)
    }

    /// Validates a generated grid and samples the exact sine at each angle.
    fn from_angles(angles: Vec<f64>) -> Result<Self, BuildError> {
        if angles.len() < MIN_SAMPLES {
            return Err(BuildError::TooFewSamples {
                actual: angles.len(),
                minimum: MIN_SAMPLES,
            });
        }
        let first = angles[0];
        let bound = angles[angles.len() - 1];
        if first != 0.0 || !bound.is_finite() {
            return Err(BuildError::DomainMismatch { first, last: bound });
        }
        for i in 1..angles.len() {
            // NaN fails the comparison and is caught here as well.
            if !(angles[i] > angles[i - 1]) {
                return Err(BuildError::NonIncreasing { index: i });
            }
        }
        let values = angles.iter().map(|&a| libm::sin(a)).collect();
        Ok(Self {
            angles,
            values,
            bound,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always `false` for a constructed table; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Upper end of the sampled domain (the last angle, nominally π/2).
    pub fn domain_bound(&self) -> f64 {
        self.bound
    }

    /// Sample angles, strictly increasing from 0 to the domain bound.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Exact sine values parallel to [`angles`](LookupTable::angles).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates `(angle, value)` sample pairs in order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.angles
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Stored value at an exact sample angle, or `None` when `angle` is not
    /// a node of this table.
    pub fn value_at(&self, angle: f64) -> Option<f64> {
        let i = self
            .angles
            .binary_search_by(|a| a.total_cmp(&angle))
            .ok()?;
        Some(self.values[i])
    }
}

// ============================================================================
// Grid generation
// ============================================================================

fn check_sample_count(n: usize) -> Result<(), BuildError> {
    if n < MIN_SAMPLES {
        return Err(BuildError::TooFewSamples {
            actual: n,
            minimum: MIN_SAMPLES,
        });
    }
    Ok(())
}

/// Curvature-weighted grid: place samples where `sin` bends the most.
///
/// Works from the equal grid's exact sine samples; the stencil spacing is
/// the equal grid's step. Exact duplicate angles (equal weights) collapse
/// to one sample.
fn curvature_weighted_grid(n: usize) -> Result<Vec<f64>, BuildError> {
    let equal = LookupTable::equal_spaced(n)?;
    let y = &equal.values;
    let step = equal.angles[1] - equal.angles[0];

    // Central-difference second derivative; boundaries stay zero.
    let mut d2 = Vec::new();
    d2.resize(n, 0.0);
    for i in 1..n - 1 {
        d2[i] = (y[i + 1] - 2.0 * y[i] + y[i - 1]) / (step * step);
    }

    // Interior weights; the leading zero anchors the grid at angle 0.
    let mut weights = Vec::with_capacity(n - 1);
    weights.push(0.0);
    for i in 1..n - 1 {
        weights.push(d2[i] * (d2[i + 1] - d2[i]));
    }

    let max = weights
        .iter()
        .fold(f64::NEG_INFINITY, |m, &w| if w > m { w } else { m });
    if !(max > 0.0) {
        return Err(BuildError::DegenerateSkew {
            reason: "no positive curvature weight",
        });
    }

    let mut angles: Vec<f64> = weights
        .iter()
        .map(|&w| w / max)
        .filter(|&w| w >= 0.0)
        .map(|w| w * FRAC_PI_2)
        .collect();
    angles.sort_by(f64::total_cmp);
    angles.dedup();
    if angles.len() < MIN_SAMPLES {
        return Err(BuildError::DegenerateSkew {
            reason: "fewer than two samples survived weight filtering",
        });
    }
    Ok(angles)
}

/// Power-law grid: `θ_i = (i/(N−1))^(1/p) · π/2`.
fn power_law_grid(n: usize, exponent: f64) -> Result<Vec<f64>, BuildError> {
    if !exponent.is_finite() || exponent <= 0.0 {
        return Err(BuildError::InvalidExponent { exponent });
    }
    let last = (n - 1) as f64;
    let inv = 1.0 / exponent;
    Ok((0..n)
        .map(|i| libm::pow(i as f64 / last, inv) * FRAC_PI_2)
        .collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_grid(table: &LookupTable) {
        assert_eq!(table.angles[0], 0.0);
        assert_eq!(table.bound, FRAC_PI_2);
        for i in 1..table.len() {
            assert!(table.angles[i] > table.angles[i - 1]);
        }
        for (angle, value) in table.samples() {
            assert_eq!(value, libm::sin(angle));
        }
    }

    #[test]
    fn equal_spaced_spans_quadrant() {
        let table = LookupTable::equal_spaced(20).unwrap();
        assert_eq!(table.len(), 20);
        assert!(!table.is_empty());
        assert_valid_grid(&table);
    }

    #[test]
    fn equal_spaced_minimum_size() {
        let table = LookupTable::equal_spaced(2).unwrap();
        assert_eq!(table.angles(), &[0.0, FRAC_PI_2]);
        assert_eq!(table.values()[0], 0.0);
        assert_eq!(table.values()[1], 1.0);
    }

    #[test]
    fn too_few_samples_rejected() {
        for n in [0, 1] {
            assert_eq!(
                LookupTable::equal_spaced(n),
                Err(BuildError::TooFewSamples {
                    actual: n,
                    minimum: MIN_SAMPLES
                })
            );
            assert!(LookupTable::skewed(n, SkewStrategy::default()).is_err());
        }
    }

    #[test]
    fn power_law_grid_is_full_length() {
        for n in [2, 5, 20, 100] {
            let table = LookupTable::skewed(n, SkewStrategy::default()).unwrap();
            assert_eq!(table.len(), n);
            assert_valid_grid(&table);
        }
    }

    #[test]
    fn power_law_skews_toward_upper_end() {
        let table = LookupTable::skewed(10, SkewStrategy::default()).unwrap();
        let angles = table.angles();
        // Gaps shrink toward π/2 for exponent > 1.
        let first_gap = angles[1] - angles[0];
        let last_gap = angles[9] - angles[8];
        assert!(first_gap > last_gap);
    }

    #[test]
    fn power_law_invalid_exponents_rejected() {
        for exponent in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let err = LookupTable::skewed(10, SkewStrategy::PowerLaw { exponent });
            assert!(matches!(err, Err(BuildError::InvalidExponent { .. })));
        }
    }

    #[test]
    fn curvature_weighted_grid_is_valid() {
        let table = LookupTable::skewed(20, SkewStrategy::CurvatureWeighted).unwrap();
        // Data-dependent length: filtering may drop points but never grows.
        assert!(table.len() >= MIN_SAMPLES);
        assert!(table.len() <= 20);
        assert_valid_grid(&table);
    }

    #[test]
    fn curvature_weighted_degenerates_on_tiny_tables() {
        // With no interior stencil (n = 2) or a single interior weight that
        // comes out negative (n = 3) there is no positive weight to keep.
        for n in [2, 3] {
            let err = LookupTable::skewed(n, SkewStrategy::CurvatureWeighted);
            assert!(matches!(err, Err(BuildError::DegenerateSkew { .. })), "n = {n}");
        }
    }

    #[test]
    fn value_at_finds_exact_nodes_only() {
        let table = LookupTable::equal_spaced(9).unwrap();
        for (angle, value) in table.samples() {
            assert_eq!(table.value_at(angle), Some(value));
        }
        assert_eq!(table.value_at(0.1234), None);
        assert_eq!(table.value_at(-1.0), None);
    }
}
