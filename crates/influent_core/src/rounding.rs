//! Fixed-precision rounding for sampled values.
//!
//! Values are rounded half away from zero, so `2.25` at one decimal becomes
//! `2.3` and `0.5` at zero decimals becomes `1.0`. Because rounding happens
//! after the draw, a value may sit up to [`tolerance`] outside its interval
//! when a bound is not representable at the field's precision.

/// Rounds `value` to `decimals` places, half away from zero.
///
/// # Examples
///
/// ```rust
/// use influent_core::rounding::round_to;
///
/// assert_eq!(round_to(7.25, 1), 7.3);
/// assert_eq!(round_to(123.5, 0), 124.0);
/// assert_eq!(round_to(-0.5, 0), -1.0);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Half a unit at the given precision.
#[inline]
pub fn tolerance(decimals: u32) -> f64 {
    0.5 / 10f64.powi(decimals as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_integer() {
        assert_eq!(round_to(20.0, 0), 20.0);
        assert_eq!(round_to(20.49, 0), 20.0);
        assert_eq!(round_to(20.5, 0), 21.0);
        assert_eq!(round_to(499.999, 0), 500.0);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_relative_eq!(round_to(6.04, 1), 6.0);
        assert_relative_eq!(round_to(6.06, 1), 6.1);
        assert_relative_eq!(round_to(8.44, 1), 8.4);
        assert_relative_eq!(round_to(999.96, 1), 1000.0);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // Exactly representable halves
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_integer_result_is_whole() {
        for v in [20.1, 137.7, 250.5, 499.4] {
            assert_eq!(round_to(v, 0).fract(), 0.0);
        }
    }

    #[test]
    fn test_tolerance() {
        assert_relative_eq!(tolerance(0), 0.5);
        assert_relative_eq!(tolerance(1), 0.05);
        assert_relative_eq!(tolerance(2), 0.005);
    }
}
