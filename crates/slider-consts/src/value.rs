use serde::Serialize;

/// Value stored under a constant name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// Fractional value.
    Float(f64),
    /// Integer value.
    Int(i64),
}

impl ConstantValue {
    /// Value as `f64`.
    ///
    /// Integer constants are within the exact range of `f64`, so the
    /// conversion is lossless for every entry in the table.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Float(v) => v,
            Self::Int(v) => v as f64,
        }
    }

    /// Value as `i64`, or None for fractional values.
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Float(_) => None,
            Self::Int(v) => Some(v),
        }
    }
}
