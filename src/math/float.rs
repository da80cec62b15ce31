use super::TOLERANCE;

/// Returns true if `a` and `b` differ by no more than [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Snaps a value to the [`TOLERANCE`] grid.
///
/// Point equality and point hashing both normalize through this single
/// function, so coordinates that compare equal always hash equal.
#[must_use]
pub fn quantize(v: f64) -> f64 {
    // The `+ 0.0` collapses -0.0 into 0.0 so the bit patterns agree.
    (v / TOLERANCE).round() * TOLERANCE + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_within_tolerance() {
        assert!(approx_eq(1.0, 1.0 + TOLERANCE / 2.0));
        assert!(approx_eq(0.0, 0.0));
    }

    #[test]
    fn approx_eq_beyond_tolerance() {
        assert!(!approx_eq(1.0, 1.0 + TOLERANCE * 10.0));
        assert!(!approx_eq(0.0, 1.0));
    }

    #[test]
    fn quantize_is_idempotent() {
        let q = quantize(0.5);
        assert_eq!(quantize(q).to_bits(), q.to_bits());
    }

    #[test]
    fn quantize_merges_sub_tolerance_noise() {
        let a = quantize(1.0);
        let b = quantize(1.0 + TOLERANCE / 100.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn quantize_collapses_negative_zero() {
        assert_eq!(quantize(-0.0).to_bits(), quantize(0.0).to_bits());
    }

    #[test]
    fn quantize_separates_distinct_values() {
        let a = quantize(1.0);
        let b = quantize(1.0 + TOLERANCE * 100.0);
        assert_ne!(a.to_bits(), b.to_bits());
    }
}
