//! Step indicator layout along the slider track.

use slider_consts::ConstantsTable;

use crate::SliderProps;

/// Option count above which step labels switch to the small font.
const MAX_BIG_LABEL_OPTIONS: usize = 9;

/// A step label positioned on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMarker {
    /// Slider value at this step.
    pub value: f64,
    /// Horizontal offset from the left edge of the track.
    pub offset: f64,
    /// Label font size.
    pub font_size: u32,
}

/// Font size for step labels when `option_count` labels are shown.
#[must_use]
pub fn step_label_font_size(option_count: usize, table: &ConstantsTable) -> u32 {
    if option_count > MAX_BIG_LABEL_OPTIONS {
        table.step_number_text_font_small()
    } else {
        table.step_number_text_font_big()
    }
}

/// Padding on each side of the step indicator for a track of `track_width`.
///
/// Negative or NaN widths are treated as zero.
#[must_use]
pub fn horizontal_padding(track_width: f64, table: &ConstantsTable) -> f64 {
    track_width.max(0.0) * table.margin_horizontal_padding()
}

/// Lay out one marker per step option, evenly spaced between the paddings.
///
/// Offsets run right to left when `props.inverted` is set. The marker count
/// is bounded by [`MAX_STEP_OPTIONS`](crate::MAX_STEP_OPTIONS) + 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn step_markers(
    props: &SliderProps,
    track_width: f64,
    table: &ConstantsTable,
) -> Vec<StepMarker> {
    let options = props.step_options(table);
    let width = track_width.max(0.0);
    let padding = horizontal_padding(width, table);
    let inner_width = (width - 2.0 * padding).max(0.0);
    let font_size = step_label_font_size(options.len(), table);
    let last = options.len().saturating_sub(1);

    options
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let fraction = if last == 0 {
                0.0
            } else {
                i as f64 / last as f64
            };
            let offset = padding + inner_width * fraction;
            StepMarker {
                value,
                offset: if props.inverted { width - offset } else { offset },
                font_size,
            }
        })
        .collect()
}
