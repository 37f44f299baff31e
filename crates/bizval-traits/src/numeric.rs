//! Numeric helpers shared by strategies and calculators.

/// Rounds to the nearest whole unit, halves toward positive infinity.
///
/// This matches how the questionnaire backend rounded valuations, so
/// `-2.5` becomes `-2.0` rather than `-3.0` as `f64::round` would give.
///
/// # Examples
///
/// ```
/// use bizval_traits::numeric::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(754_999.6), 755_000.0);
/// ```
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Sums a base value and signed deltas.
#[must_use]
pub fn sum_deltas(base: f64, deltas: impl IntoIterator<Item = f64>) -> f64 {
    deltas.into_iter().fold(base, |acc, d| acc + d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_positive() {
        assert_eq!(round_half_up(0.4), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(715_000.0), 715_000.0);
    }

    #[test]
    fn test_round_half_up_negative() {
        assert_eq!(round_half_up(-0.4), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-0.6), -1.0);
        assert_eq!(round_half_up(-10_000.5), -10_000.0);
    }

    #[test]
    fn test_round_half_up_idempotent() {
        let once = round_half_up(123_456.789);
        assert_eq!(round_half_up(once), once);
    }

    #[test]
    fn test_sum_deltas() {
        assert_eq!(sum_deltas(2.0, [0.5, 0.25, -0.25]), 2.5);
        assert_eq!(sum_deltas(2.5, std::iter::empty()), 2.5);
    }
}
