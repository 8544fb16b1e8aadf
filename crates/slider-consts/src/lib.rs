//! Immutable constants for slider step rendering.
//!
//! The slider draws a track with optional step markers and numbered step
//! labels. The values that drive that layout live in a single read-only
//! [`ConstantsTable`]:
//!
//! | Name | Value |
//! |------|-------|
//! | `MARGIN_HORIZONTAL_PADDING` | `0.033` |
//! | `STEP_NUMBER_TEXT_FONT_SMALL` | `8` |
//! | `STEP_NUMBER_TEXT_FONT_BIG` | `12` |
//! | `LIMIT_MIN_VALUE` | `-9007199254740991` |
//! | `LIMIT_MAX_VALUE` | `9007199254740991` |
//! | `DEFAULT_STEP_RESOLUTION` | `100` |
//!
//! The table has no setters. Components receive it as `&ConstantsTable`;
//! [`ConstantsTable::standard`] is meant for the composition root only.
//!
//! # Example
//!
//! ```
//! use slider_consts::{ConstantName, ConstantsTable};
//!
//! let table = ConstantsTable::standard();
//! assert_eq!(table.get(ConstantName::DefaultStepResolution).as_i64(), Some(100));
//! assert_eq!(table.get_by_name("STEP_NUMBER_TEXT_FONT_BIG").unwrap().as_i64(), Some(12));
//! ```

#![warn(missing_docs)]

mod consts;
mod error;
mod name;
mod table;
mod value;

pub use consts::{
    DEFAULT_STEP_RESOLUTION, LIMIT_MAX_VALUE, LIMIT_MIN_VALUE, MARGIN_HORIZONTAL_PADDING,
    STEP_NUMBER_TEXT_FONT_BIG, STEP_NUMBER_TEXT_FONT_SMALL,
};
pub use error::ConstantsError;
pub use name::ConstantName;
pub use table::ConstantsTable;
pub use value::ConstantValue;
