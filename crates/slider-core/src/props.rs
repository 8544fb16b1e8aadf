//! Slider value range and step settings.

use slider_consts::ConstantsTable;

use crate::PropsError;

/// Tolerance when counting how many whole steps fit in a range.
const STEP_COUNT_EPSILON: f64 = 1e-9;

/// Upper bound on the number of whole steps in a slider range.
pub const MAX_STEP_OPTIONS: usize = 10_000;

/// Slider properties.
///
/// `step == 0.0` means the slider is continuous. The limits restrict the
/// reachable value further than the range does and default to the safe
/// integer bounds, i.e. no restriction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderProps {
    /// Current value.
    pub value: f64,
    /// Start of the range.
    pub minimum_value: f64,
    /// End of the range.
    pub maximum_value: f64,
    /// Step size, 0 for continuous.
    pub step: f64,
    /// Lowest value the slider may be moved to.
    pub lower_limit: f64,
    /// Highest value the slider may be moved to.
    pub upper_limit: f64,
    /// Whether the track runs from right to left.
    pub inverted: bool,
}

impl Default for SliderProps {
    fn default() -> Self {
        Self::default_with(ConstantsTable::standard())
    }
}

impl SliderProps {
    /// Default props with limits taken from `table`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn default_with(table: &ConstantsTable) -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            lower_limit: table.limit_min_value() as f64,
            upper_limit: table.limit_max_value() as f64,
            inverted: false,
        }
    }

    /// Check that the props describe a usable slider.
    ///
    /// # Errors
    ///
    /// Returns the first `PropsError` found.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self, table: &ConstantsTable) -> Result<(), PropsError> {
        let fields = [
            ("value", self.value),
            ("minimum_value", self.minimum_value),
            ("maximum_value", self.maximum_value),
            ("step", self.step),
            ("lower_limit", self.lower_limit),
            ("upper_limit", self.upper_limit),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PropsError::NonFinite { field });
        }

        if self.minimum_value > self.maximum_value {
            return Err(PropsError::InvertedRange {
                minimum: self.minimum_value,
                maximum: self.maximum_value,
            });
        }
        if self.step < 0.0 {
            return Err(PropsError::NegativeStep(self.step));
        }
        if self.step > 0.0
            && (self.maximum_value - self.minimum_value) / self.step > MAX_STEP_OPTIONS as f64
        {
            return Err(PropsError::TooManySteps {
                step: self.step,
                max: MAX_STEP_OPTIONS,
            });
        }
        if self.lower_limit > self.upper_limit {
            return Err(PropsError::InvertedLimits {
                lower: self.lower_limit,
                upper: self.upper_limit,
            });
        }
        if self.lower_limit < table.limit_min_value() as f64 {
            return Err(PropsError::LimitOutOfRange {
                field: "lower_limit",
            });
        }
        if self.upper_limit > table.limit_max_value() as f64 {
            return Err(PropsError::LimitOutOfRange {
                field: "upper_limit",
            });
        }

        Ok(())
    }

    /// Selectable values from `minimum_value` to `maximum_value`.
    ///
    /// With an explicit step, options are `minimum + i * step` for every
    /// whole step that fits. A continuous slider is divided into
    /// `DEFAULT_STEP_RESOLUTION` equal steps. An empty or inverted range
    /// yields only `minimum_value`.
    ///
    /// A step too small for the range is replaced by `MAX_STEP_OPTIONS`
    /// equal steps.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn step_options(&self, table: &ConstantsTable) -> Vec<f64> {
        let span = self.maximum_value - self.minimum_value;
        if span.is_nan() || span <= 0.0 {
            return vec![self.minimum_value];
        }

        let (step, count) = if self.step > 0.0 {
            let whole_steps = (span / self.step + STEP_COUNT_EPSILON).floor();
            if whole_steps > MAX_STEP_OPTIONS as f64 {
                tracing::warn!(
                    step = self.step,
                    max = MAX_STEP_OPTIONS,
                    "step too small for range, using maximum step count"
                );
                (span / MAX_STEP_OPTIONS as f64, MAX_STEP_OPTIONS)
            } else {
                (self.step, whole_steps as usize)
            }
        } else {
            let resolution = table.default_step_resolution();
            (span / f64::from(resolution), resolution as usize)
        };

        (0..=count)
            .map(|i| self.minimum_value + i as f64 * step)
            .collect()
    }

    /// Clamp `value` into `[lower_limit, upper_limit]`.
    ///
    /// Inverted limits are ignored with a warning.
    #[must_use]
    pub fn clamp_to_limits(&self, value: f64) -> f64 {
        if self.lower_limit <= self.upper_limit {
            value.clamp(self.lower_limit, self.upper_limit)
        } else {
            tracing::warn!(
                lower_limit = self.lower_limit,
                upper_limit = self.upper_limit,
                "lower_limit exceeds upper_limit, limits ignored"
            );
            value
        }
    }

    /// Round `value` to the nearest step, then clamp into the range and
    /// the limits.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let mut snapped = value;
        if self.step > 0.0 {
            snapped = self.minimum_value
                + ((snapped - self.minimum_value) / self.step).round() * self.step;
        }
        if self.minimum_value <= self.maximum_value {
            snapped = snapped.clamp(self.minimum_value, self.maximum_value);
        }
        self.clamp_to_limits(snapped)
    }
}
