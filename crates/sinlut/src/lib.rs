//! Quarter-wave sine approximation via lookup tables.
//!
//! `sinlut` approximates `sin(x)` with a precomputed table of samples over a
//! single quadrant `[0, π/2]` and piecewise-linear interpolation between the
//! bracketing samples. Arbitrary angles (any sign, any magnitude) are first
//! folded into the table's domain using sine's symmetries, so one
//! quarter-wave table covers the full real line. This trades exactness for a
//! bounded, tunable error at O(log N) cost per lookup, the classic approach
//! for targets without fast transcendental hardware.
//!
//! # Quadrant folding
//!
//! With `L` the table's own domain bound (nominally π/2) and `a` the
//! magnitude of the query reduced modulo the full period `4L`:
//!
//! | Reduced angle   | Lookup angle | Sign    |
//! |-----------------|--------------|---------|
//! | `[0, L]`        | `a`          | `+`     |
//! | `(L, 2L]`       | `2L − a`     | `+`     |
//! | `(2L, 3L]`      | `a − 2L`     | `−`     |
//! | `(3L, 4L]`      | `4L − a`     | `−`     |
//!
//! Negative queries negate the result first (`sin(−x) = −sin(x)`).
//!
//! # Grid strategies
//!
//! Two table grids are provided: equal spacing, and a skewed grid that
//! concentrates samples where interpolation error for a fixed sample budget
//! is largest. The skewed grid comes in two named variants
//! ([`SkewStrategy`]): a curvature-weighted, data-dependent grid and a
//! deterministic power-law warp of the domain.
//!
//! # Example
//!
//! ```
//! use sinlut::{SkewStrategy, TablePair};
//!
//! let tables = TablePair::build(20, SkewStrategy::default()).unwrap();
//! let result = tables.evaluate(sinlut::degrees_to_radians(45.0));
//!
//! let approx = result.approx_equal_spacing.unwrap();
//! assert!((approx - 0.7071).abs() < 1e-3);
//! assert!((result.exact - approx).abs() < 1e-3);
//! ```
//!
//! # `no_std`
//!
//! The crate is `no_std`-capable (requires `alloc`). The default `std`
//! feature only adds `std::error::Error` for [`BuildError`]; ground-truth
//! sine comes from `libm` and works on any target.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod eval;
mod interp;
mod table;

pub use eval::{
    degrees_to_radians, radians_to_degrees, EvaluationResult, TablePair,
    RELATIVE_ERROR_ZERO_THRESHOLD,
};
pub use table::{
    BuildError, LookupTable, SkewStrategy, DEFAULT_POWER_LAW_EXPONENT, MIN_SAMPLES,
};
