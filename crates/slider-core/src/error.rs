/// Invalid slider props.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropsError {
    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Field name (e.g., "`maximum_value`").
        field: &'static str,
    },
    /// `minimum_value` is greater than `maximum_value`.
    #[error("minimum_value ({minimum}) cannot exceed maximum_value ({maximum})")]
    InvertedRange { minimum: f64, maximum: f64 },
    /// `step` is negative.
    #[error("step cannot be negative (got {0})")]
    NegativeStep(f64),
    /// `lower_limit` is greater than `upper_limit`.
    #[error("lower_limit ({lower}) cannot exceed upper_limit ({upper})")]
    InvertedLimits { lower: f64, upper: f64 },
    /// A limit lies outside the safe integer range.
    #[error("{field} is outside the safe integer range")]
    LimitOutOfRange {
        /// Field name (e.g., "`upper_limit`").
        field: &'static str,
    },
    /// `step` divides the range into more steps than supported.
    #[error("step {step} divides the range into more than {max} steps")]
    TooManySteps { step: f64, max: usize },
}
