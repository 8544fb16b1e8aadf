//! The read-only constants table.

use serde::Serialize;

use crate::consts;
use crate::{ConstantName, ConstantValue, ConstantsError};

static STANDARD: ConstantsTable = ConstantsTable::new();

/// Immutable mapping from [`ConstantName`] to [`ConstantValue`].
///
/// Fields are private and there are no setters, so any attempt to change an
/// entry is rejected by the compiler. Serializes as a map keyed by the
/// `SCREAMING_SNAKE_CASE` names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ConstantsTable {
    margin_horizontal_padding: f64,
    step_number_text_font_small: u32,
    step_number_text_font_big: u32,
    limit_min_value: i64,
    limit_max_value: i64,
    default_step_resolution: u32,
}

impl Default for ConstantsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantsTable {
    const fn new() -> Self {
        Self {
            margin_horizontal_padding: consts::MARGIN_HORIZONTAL_PADDING,
            step_number_text_font_small: consts::STEP_NUMBER_TEXT_FONT_SMALL,
            step_number_text_font_big: consts::STEP_NUMBER_TEXT_FONT_BIG,
            limit_min_value: consts::LIMIT_MIN_VALUE,
            limit_max_value: consts::LIMIT_MAX_VALUE,
            default_step_resolution: consts::DEFAULT_STEP_RESOLUTION,
        }
    }

    /// Process-wide table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Look up a constant by name.
    #[must_use]
    pub fn get(&self, name: ConstantName) -> ConstantValue {
        match name {
            ConstantName::MarginHorizontalPadding => {
                ConstantValue::Float(self.margin_horizontal_padding)
            }
            ConstantName::StepNumberTextFontSmall => {
                ConstantValue::Int(i64::from(self.step_number_text_font_small))
            }
            ConstantName::StepNumberTextFontBig => {
                ConstantValue::Int(i64::from(self.step_number_text_font_big))
            }
            ConstantName::LimitMinValue => ConstantValue::Int(self.limit_min_value),
            ConstantName::LimitMaxValue => ConstantValue::Int(self.limit_max_value),
            ConstantName::DefaultStepResolution => {
                ConstantValue::Int(i64::from(self.default_step_resolution))
            }
        }
    }

    /// Look up a constant by its `SCREAMING_SNAKE_CASE` name.
    ///
    /// # Errors
    ///
    /// Returns `ConstantsError::UnknownName` if `name` is not a constant.
    pub fn get_by_name(&self, name: &str) -> Result<ConstantValue, ConstantsError> {
        Ok(self.get(name.parse()?))
    }

    /// Iterate over all entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ConstantName, ConstantValue)> + '_ {
        ConstantName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    /// Error for an attempt to assign `name` at runtime.
    ///
    /// Used by layers that receive key/value input (config files) and must
    /// refuse to redefine a constant. Unknown names yield
    /// `ConstantsError::UnknownName`.
    #[must_use]
    pub fn reject_assignment(name: &str) -> ConstantsError {
        match name.parse::<ConstantName>() {
            Ok(name) => ConstantsError::ImmutabilityViolation { name },
            Err(e) => e,
        }
    }

    /// `MARGIN_HORIZONTAL_PADDING`: padding as a fraction of track width.
    #[must_use]
    pub fn margin_horizontal_padding(&self) -> f64 {
        self.margin_horizontal_padding
    }

    /// `STEP_NUMBER_TEXT_FONT_SMALL`: label font size for many steps.
    #[must_use]
    pub fn step_number_text_font_small(&self) -> u32 {
        self.step_number_text_font_small
    }

    /// `STEP_NUMBER_TEXT_FONT_BIG`: label font size for few steps.
    #[must_use]
    pub fn step_number_text_font_big(&self) -> u32 {
        self.step_number_text_font_big
    }

    /// `LIMIT_MIN_VALUE`: smallest safe integer.
    #[must_use]
    pub fn limit_min_value(&self) -> i64 {
        self.limit_min_value
    }

    /// `LIMIT_MAX_VALUE`: largest safe integer.
    #[must_use]
    pub fn limit_max_value(&self) -> i64 {
        self.limit_max_value
    }

    /// `DEFAULT_STEP_RESOLUTION`: subdivisions of a continuous slider.
    #[must_use]
    pub fn default_step_resolution(&self) -> u32 {
        self.default_step_resolution
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(ConstantsTable: Send, Sync);

    #[test]
    fn test_standard_values() {
        let table = ConstantsTable::standard();
        assert_eq!(
            table.get(ConstantName::MarginHorizontalPadding).as_f64().to_bits(),
            0.033f64.to_bits()
        );
        assert_eq!(
            table.get(ConstantName::StepNumberTextFontSmall),
            ConstantValue::Int(8)
        );
        assert_eq!(
            table.get(ConstantName::StepNumberTextFontBig),
            ConstantValue::Int(12)
        );
        assert_eq!(
            table.get(ConstantName::LimitMinValue),
            ConstantValue::Int(-9_007_199_254_740_991)
        );
        assert_eq!(
            table.get(ConstantName::LimitMaxValue),
            ConstantValue::Int(9_007_199_254_740_991)
        );
        assert_eq!(
            table.get(ConstantName::DefaultStepResolution),
            ConstantValue::Int(100)
        );
    }

    #[test]
    fn test_get_by_name() {
        let table = ConstantsTable::standard();
        assert_eq!(
            table.get_by_name("DEFAULT_STEP_RESOLUTION").unwrap(),
            ConstantValue::Int(100)
        );
        assert_eq!(
            table
                .get_by_name("MARGIN_HORIZONTAL_PADDING")
                .unwrap()
                .as_f64()
                .to_bits(),
            0.033f64.to_bits()
        );
    }

    #[test]
    fn test_get_by_name_unknown() {
        let result = ConstantsTable::standard().get_by_name("STEP_NUMBER_TEXT_FONT_HUGE");
        assert_eq!(
            result,
            Err(ConstantsError::UnknownName(
                "STEP_NUMBER_TEXT_FONT_HUGE".to_owned()
            ))
        );
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let table = ConstantsTable::standard();
        for name in ConstantName::ALL {
            let first = table.get(name);
            for _ in 0..3 {
                assert_eq!(table.get(name), first);
            }
        }
        assert!(std::ptr::eq(ConstantsTable::standard(), table));
    }

    #[test]
    fn test_typed_accessors_match_lookup() {
        let table = ConstantsTable::default();
        assert_eq!(
            table.margin_horizontal_padding().to_bits(),
            table.get(ConstantName::MarginHorizontalPadding).as_f64().to_bits()
        );
        assert_eq!(table.step_number_text_font_small(), 8);
        assert_eq!(table.step_number_text_font_big(), 12);
        assert_eq!(table.limit_min_value(), crate::LIMIT_MIN_VALUE);
        assert_eq!(table.limit_max_value(), crate::LIMIT_MAX_VALUE);
        assert_eq!(table.default_step_resolution(), 100);
        assert_eq!(&table, ConstantsTable::standard());
    }

    #[test]
    fn test_font_ordering() {
        let table = ConstantsTable::standard();
        assert!(table.step_number_text_font_big() > table.step_number_text_font_small());
    }

    #[test]
    fn test_limit_bounds() {
        let table = ConstantsTable::standard();
        assert!(table.limit_min_value() < 0);
        assert!(table.limit_max_value() > 0);
        assert_eq!(table.limit_min_value(), -table.limit_max_value());
    }

    #[test]
    fn test_entries_in_declaration_order() {
        let names: Vec<_> = ConstantsTable::standard()
            .entries()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "MARGIN_HORIZONTAL_PADDING",
                "STEP_NUMBER_TEXT_FONT_SMALL",
                "STEP_NUMBER_TEXT_FONT_BIG",
                "LIMIT_MIN_VALUE",
                "LIMIT_MAX_VALUE",
                "DEFAULT_STEP_RESOLUTION",
            ]
        );
    }

    #[test]
    fn test_reject_assignment() {
        for name in ConstantName::ALL {
            assert_eq!(
                ConstantsTable::reject_assignment(name.as_str()),
                ConstantsError::ImmutabilityViolation { name }
            );
        }
        assert_eq!(
            ConstantsTable::reject_assignment("WIDTH"),
            ConstantsError::UnknownName("WIDTH".to_owned())
        );
    }

    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_string(ConstantsTable::standard()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"MARGIN_HORIZONTAL_PADDING":0.033,"#,
                r#""STEP_NUMBER_TEXT_FONT_SMALL":8,"#,
                r#""STEP_NUMBER_TEXT_FONT_BIG":12,"#,
                r#""LIMIT_MIN_VALUE":-9007199254740991,"#,
                r#""LIMIT_MAX_VALUE":9007199254740991,"#,
                r#""DEFAULT_STEP_RESOLUTION":100}"#
            )
        );
    }

    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    ConstantsTable::standard()
                        .entries()
                        .map(|(_, v)| v.as_f64())
                        .sum::<f64>()
                })
            })
            .collect();
        let sums: Vec<u64> = handles
            .into_iter()
            .map(|h| h.join().unwrap().to_bits())
            .collect();
        assert!(sums.windows(2).all(|w| w[0] == w[1]));
    }
}
