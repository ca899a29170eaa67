//! Interpolation engine: quadrant folding plus piecewise-linear lookup.
//!
//! Folding uses the table's own domain bound `L` as the quarter-period, so a
//! table whose domain does not end exactly at π/2 still folds consistently
//! against itself. The full period is `4L`.

use crate::table::LookupTable;

/// A query angle folded into a table's principal domain `[0, L]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Folded {
    /// Angle to look up in the table.
    lookup: f64,
    /// `+1.0` or `-1.0`, applied to the interpolated value.
    multiplier: f64,
}

/// Folds an arbitrary angle into `[0, bound]`.
///
/// Applies oddness (`sin(−x) = −sin(x)`), reduces the magnitude modulo the
/// full period `4·bound` when it exceeds one period, then maps the four
/// quadrants onto the first by reflection. Branch boundaries are inclusive
/// on the lower branch: `a == bound` folds as quadrant 1, `a == 2·bound` as
/// quadrant 2, and so on (the choices agree in value at the shared node).
///
/// Returns `None` for NaN input and for any floating-point residue that
/// escapes every quadrant branch.
fn fold(angle: f64, bound: f64) -> Option<Folded> {
    let (mut magnitude, sign) = if angle < 0.0 {
        (-angle, -1.0)
    } else {
        (angle, 1.0)
    };
    let period = 4.0 * bound;
    if magnitude > period {
        magnitude %= period;
    }
    let half_period = 2.0 * bound;
    if magnitude <= bound {
        Some(Folded {
            lookup: magnitude,
            multiplier: sign,
        })
    } else if magnitude <= half_period {
        Some(Folded {
            lookup: half_period - magnitude,
            multiplier: sign,
        })
    } else if magnitude <= half_period + bound {
        Some(Folded {
            lookup: magnitude - half_period,
            multiplier: -sign,
        })
    } else if magnitude <= period {
        Some(Folded {
            lookup: period - magnitude,
            multiplier: -sign,
        })
    } else {
        None
    }
}

impl LookupTable {
    /// Approximates `sin(angle)` for an arbitrary angle in radians.
    ///
    /// The angle is folded into the table's domain (see the crate docs for
    /// the quadrant mapping) and linearly interpolated between the two
    /// bracketing samples; at a sample node the stored value is returned
    /// exactly. `None` means the angle could not be resolved to a bracketing
    /// pair — NaN input or fold residue — and is distinguishable from a
    /// legitimate zero result.
    ///
    /// ```
    /// use sinlut::LookupTable;
    /// use core::f64::consts::FRAC_PI_2;
    ///
    /// let table = LookupTable::equal_spaced(2).unwrap();
    /// assert_eq!(table.evaluate(0.0), Some(0.0));
    /// assert_eq!(table.evaluate(FRAC_PI_2), Some(1.0));
    /// assert_eq!(table.evaluate(f64::NAN), None);
    /// ```
    pub fn evaluate(&self, angle: f64) -> Option<f64> {
        let folded = fold(angle, self.bound)?;
        let value = self.interpolate(folded.lookup)?;
        Some(folded.multiplier * value)
    }

    /// Linear interpolation of a folded angle within `[angles[0], bound]`.
    ///
    /// The bracketing pair is found by binary search; the table is sorted by
    /// construction.
    fn interpolate(&self, x: f64) -> Option<f64> {
        if x < self.angles[0] || x > self.bound {
            return None;
        }
        // Index of the first sample strictly greater than x; the bracket is
        // [hi - 1, hi].
        let hi = self.angles.partition_point(|&a| a <= x);
        if hi == self.angles.len() {
            // x is exactly the last sample.
            return Some(self.values[hi - 1]);
        }
        if hi == 0 {
            // Only NaN reaches here; the range check rejects everything else.
            return None;
        }
        let (x0, x1) = (self.angles[hi - 1], self.angles[hi]);
        let (y0, y1) = (self.values[hi - 1], self.values[hi]);
        Some(y0 + (x - x0) * (y1 - y0) / (x1 - x0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    const L: f64 = FRAC_PI_2;

    #[test]
    fn fold_first_quadrant_is_identity() {
        let folded = fold(0.3, L).unwrap();
        assert_eq!(folded.lookup, 0.3);
        assert_eq!(folded.multiplier, 1.0);
    }

    #[test]
    fn fold_boundaries_take_the_lower_branch() {
        // a == L stays quadrant 1, a == 2L reflects to 0 with positive sign,
        // a == 3L maps to L negated, a == 4L closes the period at 0 negated.
        let q1 = fold(L, L).unwrap();
        assert_eq!((q1.lookup, q1.multiplier), (L, 1.0));
        let q2 = fold(2.0 * L, L).unwrap();
        assert_eq!((q2.lookup, q2.multiplier), (0.0, 1.0));
        let q3 = fold(3.0 * L, L).unwrap();
        assert_eq!((q3.lookup, q3.multiplier), (L, -1.0));
        let q4 = fold(4.0 * L, L).unwrap();
        assert_eq!((q4.lookup, q4.multiplier), (0.0, -1.0));
    }

    #[test]
    fn fold_reflects_second_quadrant() {
        let folded = fold(2.0 * L - 0.4, L).unwrap();
        assert!((folded.lookup - 0.4).abs() < 1e-15);
        assert_eq!(folded.multiplier, 1.0);
    }

    #[test]
    fn fold_negates_third_and_fourth_quadrants() {
        let q3 = fold(2.0 * L + 0.4, L).unwrap();
        assert!((q3.lookup - 0.4).abs() < 1e-15);
        assert_eq!(q3.multiplier, -1.0);

        let q4 = fold(4.0 * L - 0.4, L).unwrap();
        assert!((q4.lookup - 0.4).abs() < 1e-15);
        assert_eq!(q4.multiplier, -1.0);
    }

    #[test]
    fn fold_negative_angles_flip_the_sign() {
        let folded = fold(-0.3, L).unwrap();
        assert_eq!(folded.lookup, 0.3);
        assert_eq!(folded.multiplier, -1.0);

        // Negative angle beyond one period: negate first, then reduce.
        let wrapped = fold(-(4.0 * L + 0.3), L).unwrap();
        assert!((wrapped.lookup - 0.3).abs() < 1e-15);
        assert_eq!(wrapped.multiplier, -1.0);
    }

    #[test]
    fn fold_reduces_beyond_one_period() {
        let folded = fold(4.0 * L + 0.3, L).unwrap();
        assert!((folded.lookup - 0.3).abs() < 1e-15);
        assert_eq!(folded.multiplier, 1.0);
    }

    #[test]
    fn fold_rejects_nan_and_infinity() {
        assert_eq!(fold(f64::NAN, L), None);
        assert_eq!(fold(f64::INFINITY, L), None);
        assert_eq!(fold(f64::NEG_INFINITY, L), None);
    }

    #[test]
    fn fold_uses_the_supplied_bound() {
        // A truncated domain folds against its own last angle, not π/2.
        let bound = 1.25;
        let folded = fold(2.0 * bound - 0.5, bound).unwrap();
        assert!((folded.lookup - 0.5).abs() < 1e-15);
        assert_eq!(folded.multiplier, 1.0);
    }

    #[test]
    fn interpolate_midpoint_of_minimum_table() {
        let table = LookupTable::equal_spaced(2).unwrap();
        assert_eq!(table.interpolate(L / 2.0), Some(0.5));
    }

    #[test]
    fn interpolate_is_exact_at_nodes() {
        let table = LookupTable::equal_spaced(7).unwrap();
        for (angle, value) in table.samples() {
            assert_eq!(table.interpolate(angle), Some(value));
        }
    }

    #[test]
    fn interpolate_rejects_out_of_domain() {
        let table = LookupTable::equal_spaced(7).unwrap();
        assert_eq!(table.interpolate(-0.1), None);
        assert_eq!(table.interpolate(L + 0.1), None);
        assert_eq!(table.interpolate(f64::NAN), None);
    }
}
