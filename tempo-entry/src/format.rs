//! Text rendering of picker values.

use std::ops::Range;

use crate::{
    state::PickerState,
    time::{TimeField, TimeValue},
};

/// Display text with the cursor field singled out for emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedTime {
    /// Full display text.
    pub display: String,
    /// Zero-padded text of the cursor field.
    pub highlighted_part: String,
    /// The cursor field.
    pub field: TimeField,
    /// Byte range of the cursor field in `display`, if that field is shown.
    pub range: Option<Range<usize>>,
}

/// Formats `time` (or the current value) as `HH:MM:SS`, keeping only active
/// fields, followed by ` AM`/` PM` for 12-hour pickers.
pub fn format_plain(state: &PickerState, time: Option<&TimeValue>) -> String {
    let time = time.unwrap_or(&state.time);
    let mut text = state
        .fields
        .active()
        .into_iter()
        .map(|field| two_digit(time.field(field)))
        .collect::<Vec<_>>()
        .join(":");

    if state.format.has_period()
        && let Some(period) = time.period
    {
        text.push(' ');
        text.push_str(period.as_str());
    }

    text.truncate(text.trim_end().len());
    text
}

/// Formats the current value for an editing display.
///
/// Hours and minutes keep their trailing `:` even when no later field
/// follows, and the period is appended without a space.
pub fn format_with_highlight(state: &PickerState) -> HighlightedTime {
    let time = &state.time;
    let mut display = String::new();
    let mut range = None;

    for field in state.fields.active() {
        let start = display.len();
        display.push_str(&two_digit(time.field(field)));
        if field == state.cursor {
            range = Some(start..display.len());
        }
        if field != TimeField::Seconds {
            display.push(':');
        }
    }

    if state.format.has_period()
        && let Some(period) = time.period
    {
        display.push_str(period.as_str());
    }

    HighlightedTime {
        display,
        highlighted_part: two_digit(time.field(state.cursor)),
        field: state.cursor,
        range,
    }
}

pub(crate) fn two_digit(value: u8) -> String {
    format!("{value:02}")
}
