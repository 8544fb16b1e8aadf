//! Raw constant values backing [`ConstantsTable`](crate::ConstantsTable).

use static_assertions::const_assert;

/// Horizontal padding of the step indicator as a fraction of track width.
pub const MARGIN_HORIZONTAL_PADDING: f64 = 0.033;

/// Step label font size used when there are many step options.
pub const STEP_NUMBER_TEXT_FONT_SMALL: u32 = 8;

/// Step label font size used when there are few step options.
pub const STEP_NUMBER_TEXT_FONT_BIG: u32 = 12;

/// Largest integer exactly representable in an `f64` (2^53 - 1).
pub const LIMIT_MAX_VALUE: i64 = (1 << 53) - 1;

/// Smallest integer exactly representable in an `f64` (-(2^53 - 1)).
pub const LIMIT_MIN_VALUE: i64 = -LIMIT_MAX_VALUE;

/// Number of subdivisions of a slider without an explicit step.
pub const DEFAULT_STEP_RESOLUTION: u32 = 100;

const_assert!(STEP_NUMBER_TEXT_FONT_BIG > STEP_NUMBER_TEXT_FONT_SMALL);
const_assert!(LIMIT_MIN_VALUE < 0);
const_assert!(LIMIT_MAX_VALUE > 0);
const_assert!(LIMIT_MIN_VALUE == -LIMIT_MAX_VALUE);
const_assert!(MARGIN_HORIZONTAL_PADDING >= 0.0 && MARGIN_HORIZONTAL_PADDING <= 1.0);
const_assert!(DEFAULT_STEP_RESOLUTION > 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_integer_bounds() {
        assert_eq!(LIMIT_MAX_VALUE, 9_007_199_254_740_991);
        assert_eq!(LIMIT_MIN_VALUE, -9_007_199_254_740_991);
    }

    #[test]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn test_limits_are_exact_in_f64() {
        assert_eq!(LIMIT_MAX_VALUE as f64 as i64, LIMIT_MAX_VALUE);
        assert_eq!(LIMIT_MIN_VALUE as f64 as i64, LIMIT_MIN_VALUE);
        // One past the bound is no longer distinguishable from its neighbour.
        assert_eq!(
            ((LIMIT_MAX_VALUE + 2) as f64).to_bits(),
            ((LIMIT_MAX_VALUE + 1) as f64).to_bits()
        );
    }
}
