//! Symbolic names of the constants.

use std::fmt;
use std::str::FromStr;

use crate::ConstantsError;

/// Name of an entry in the constants table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstantName {
    /// `MARGIN_HORIZONTAL_PADDING`
    MarginHorizontalPadding,
    /// `STEP_NUMBER_TEXT_FONT_SMALL`
    StepNumberTextFontSmall,
    /// `STEP_NUMBER_TEXT_FONT_BIG`
    StepNumberTextFontBig,
    /// `LIMIT_MIN_VALUE`
    LimitMinValue,
    /// `LIMIT_MAX_VALUE`
    LimitMaxValue,
    /// `DEFAULT_STEP_RESOLUTION`
    DefaultStepResolution,
}

impl ConstantName {
    /// All names in declaration order.
    pub const ALL: [Self; 6] = [
        Self::MarginHorizontalPadding,
        Self::StepNumberTextFontSmall,
        Self::StepNumberTextFontBig,
        Self::LimitMinValue,
        Self::LimitMaxValue,
        Self::DefaultStepResolution,
    ];

    /// Parse a name from its `SCREAMING_SNAKE_CASE` form.
    ///
    /// Returns None if the string does not name a constant.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MARGIN_HORIZONTAL_PADDING" => Some(Self::MarginHorizontalPadding),
            "STEP_NUMBER_TEXT_FONT_SMALL" => Some(Self::StepNumberTextFontSmall),
            "STEP_NUMBER_TEXT_FONT_BIG" => Some(Self::StepNumberTextFontBig),
            "LIMIT_MIN_VALUE" => Some(Self::LimitMinValue),
            "LIMIT_MAX_VALUE" => Some(Self::LimitMaxValue),
            "DEFAULT_STEP_RESOLUTION" => Some(Self::DefaultStepResolution),
            _ => None,
        }
    }

    /// Return name as string representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarginHorizontalPadding => "MARGIN_HORIZONTAL_PADDING",
            Self::StepNumberTextFontSmall => "STEP_NUMBER_TEXT_FONT_SMALL",
            Self::StepNumberTextFontBig => "STEP_NUMBER_TEXT_FONT_BIG",
            Self::LimitMinValue => "LIMIT_MIN_VALUE",
            Self::LimitMaxValue => "LIMIT_MAX_VALUE",
            Self::DefaultStepResolution => "DEFAULT_STEP_RESOLUTION",
        }
    }
}

impl fmt::Display for ConstantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstantName {
    type Err = ConstantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConstantsError::UnknownName(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for name in ConstantName::ALL {
            assert_eq!(ConstantName::parse(name.as_str()), Some(name));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ConstantName::parse("default_step_resolution"), None);
        assert_eq!(ConstantName::parse("DefaultStepResolution"), None);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "LIMIT_VALUE".parse::<ConstantName>().unwrap_err();
        assert_eq!(err, ConstantsError::UnknownName("LIMIT_VALUE".to_owned()));
        assert_eq!(err.to_string(), "Unknown constant: LIMIT_VALUE");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ConstantName::MarginHorizontalPadding.to_string(),
            "MARGIN_HORIZONTAL_PADDING"
        );
    }
}
