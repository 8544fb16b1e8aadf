//! Slider props and step layout.
//!
//! Everything here reads its tuning values from an injected
//! [`ConstantsTable`](slider_consts::ConstantsTable):
//! - [`SliderProps`]: value range, step, and clamping limits
//! - [`step_label_font_size`] and [`horizontal_padding`]: step indicator sizing
//! - [`step_markers`]: positioned step labels along a track

mod error;
mod layout;
mod props;

pub use error::PropsError;
pub use layout::{StepMarker, horizontal_padding, step_label_font_size, step_markers};
pub use props::{MAX_STEP_OPTIONS, SliderProps};
