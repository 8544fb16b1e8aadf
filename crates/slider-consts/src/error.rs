use crate::ConstantName;

/// Constants lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstantsError {
    /// Name does not refer to any constant.
    #[error("Unknown constant: {0}")]
    UnknownName(String),
    /// Attempt to redefine a constant.
    #[error("Constant {name} is immutable and cannot be reassigned")]
    ImmutabilityViolation {
        /// The constant that was targeted.
        name: ConstantName,
    },
}
