//! Column model for the picker body.
//!
//! The body shows one stepper column per active field plus an AM/PM column for
//! 12-hour pickers. Renderers read [`columns`] and route their up/down
//! controls through [`TimePicker::step`](crate::TimePicker::step).

use smallvec::SmallVec;

use crate::{format::two_digit, state::PickerState, time::TimeField};

/// What a body column controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// A numeric field.
    Field(TimeField),
    /// The AM/PM period.
    Period,
}

impl ColumnKind {
    /// Column heading.
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Field(field) => field.label(),
            ColumnKind::Period => "AM/PM",
        }
    }
}

/// Direction of a stepper control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Move to the next value.
    Increment,
    /// Move to the previous value.
    Decrement,
}

/// One column of the picker body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeColumn {
    /// What the column controls.
    pub kind: ColumnKind,
    /// Heading text.
    pub label: &'static str,
    /// Current value text.
    pub value: String,
    /// Whether typed digits go to this column.
    pub is_cursor: bool,
}

/// Columns to render, in display order.
pub fn columns(state: &PickerState) -> SmallVec<[TimeColumn; 4]> {
    let mut columns: SmallVec<[TimeColumn; 4]> = state
        .fields
        .active()
        .into_iter()
        .map(|field| TimeColumn {
            kind: ColumnKind::Field(field),
            label: field.label(),
            value: two_digit(state.time.field(field)),
            is_cursor: field == state.cursor,
        })
        .collect();

    if state.format.has_period()
        && let Some(period) = state.time.period
    {
        columns.push(TimeColumn {
            kind: ColumnKind::Period,
            label: ColumnKind::Period.label(),
            value: period.as_str().to_string(),
            is_cursor: false,
        });
    }

    columns
}

/// Applies a stepper press to `state`. Returns whether a value was written.
pub(crate) fn apply_step(
    state: &mut PickerState,
    column: ColumnKind,
    direction: StepDirection,
) -> bool {
    match (column, direction) {
        (ColumnKind::Field(field), StepDirection::Increment) => {
            state.increment(field);
            true
        }
        (ColumnKind::Field(field), StepDirection::Decrement) => {
            state.decrement(field);
            true
        }
        // Both arrows flip the period.
        (ColumnKind::Period, _) => state.toggle_period(),
    }
}
