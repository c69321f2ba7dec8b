//! The data owned by one picker and the clamped/wrapping field writes.

use std::fmt;

use smallvec::SmallVec;

use crate::time::{DayPeriod, FieldSet, TimeField, TimeFormat, TimeValue};

const MINUTE_MAX: u8 = 59;
const SECOND_MAX: u8 = 59;

/// Digits typed for the cursor field since it was last cleared (at most two).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBuffer {
    digits: SmallVec<[u8; 2]>,
}

impl InputBuffer {
    /// Returns `true` when no digit is pending.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of pending digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Pending digits, oldest first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The buffer with `digit` appended.
    pub fn with_digit(&self, digit: u8) -> Self {
        let mut digits = self.digits.clone();
        digits.push(digit);
        Self { digits }
    }

    /// The most recently typed digit.
    pub fn last(&self) -> Option<u8> {
        self.digits.last().copied()
    }

    /// The decimal value of the pending digits.
    pub fn value(&self) -> u8 {
        self.digits
            .iter()
            .fold(0u8, |acc, digit| acc.saturating_mul(10).saturating_add(*digit))
    }

    /// Drops every pending digit.
    pub fn clear(&mut self) {
        self.digits.clear();
    }
}

impl fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Extra state written together with a field commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickerStatePatch {
    /// New cursor position.
    pub cursor: Option<TimeField>,
    /// New input buffer.
    pub buffer: Option<InputBuffer>,
    /// New visibility flag.
    pub visible: Option<bool>,
}

impl PickerStatePatch {
    /// Moves the cursor and clears the buffer.
    pub fn advance_to(field: TimeField) -> Self {
        Self {
            cursor: Some(field),
            buffer: Some(InputBuffer::default()),
            visible: None,
        }
    }
}

/// Everything one picker instance owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    /// The current time value.
    pub time: TimeValue,
    /// The clock format.
    pub format: TimeFormat,
    /// Active fields.
    pub fields: FieldSet,
    /// Field receiving typed digits.
    pub cursor: TimeField,
    /// Digits typed for the cursor field.
    pub buffer: InputBuffer,
    /// Whether the picker is shown.
    pub visible: bool,
}

impl PickerState {
    /// Creates the mount-time state: cursor on hours, empty buffer, hidden.
    pub fn new(format: TimeFormat, fields: FieldSet, time: TimeValue) -> Self {
        Self {
            time,
            format,
            fields,
            cursor: TimeField::Hours,
            buffer: InputBuffer::default(),
            visible: false,
        }
    }

    /// Writes a clamped hour.
    pub fn set_hours(&mut self, hours: i32) {
        let (min, max) = self.format.hour_bounds();
        self.time.hours = clamp_field(hours, min, max);
    }

    /// Writes a clamped minute and applies `extra` in the same update.
    pub fn set_minutes(&mut self, minutes: i32, extra: PickerStatePatch) {
        self.time.minutes = clamp_field(minutes, 0, MINUTE_MAX);
        self.apply_patch(extra);
    }

    /// Writes a clamped second.
    pub fn set_seconds(&mut self, seconds: i32) {
        self.time.seconds = clamp_field(seconds, 0, SECOND_MAX);
    }

    /// Writes the period. Returns `false` when the format has no period.
    pub fn set_period(&mut self, period: DayPeriod) -> bool {
        if !self.format.has_period() {
            return false;
        }
        self.time.period = Some(period);
        true
    }

    /// Writes a clamped value to `field`.
    pub fn set_field(&mut self, field: TimeField, value: i32) {
        match field {
            TimeField::Hours => self.set_hours(value),
            TimeField::Minutes => self.set_minutes(value, PickerStatePatch::default()),
            TimeField::Seconds => self.set_seconds(value),
        }
    }

    /// Writes an hour without clamping. Only the 12-hour leading `0` uses this.
    pub(crate) fn set_provisional_hours(&mut self, hours: u8) {
        self.time.hours = hours;
    }

    /// Steps `field` up by one, wrapping at the top of its range.
    pub fn increment(&mut self, field: TimeField) {
        let (min, max) = self.field_bounds(field);
        let current = self.time.field(field);
        let next = if current == max {
            i32::from(min)
        } else {
            i32::from(current) + 1
        };
        self.set_field(field, next);
    }

    /// Steps `field` down by one, wrapping at the bottom of its range.
    pub fn decrement(&mut self, field: TimeField) {
        let (min, max) = self.field_bounds(field);
        let current = self.time.field(field);
        let next = if current == min {
            i32::from(max)
        } else {
            i32::from(current) - 1
        };
        self.set_field(field, next);
    }

    /// Flips AM and PM. Returns `false` when there is nothing to flip.
    pub fn toggle_period(&mut self) -> bool {
        match self.time.period {
            Some(period) if self.format.has_period() => self.set_period(period.toggled()),
            _ => false,
        }
    }

    /// Moves the cursor and clears the buffer.
    pub fn set_cursor(&mut self, field: TimeField) {
        self.cursor = field;
        self.buffer.clear();
    }

    /// Applies the set parts of `patch`.
    pub fn apply_patch(&mut self, patch: PickerStatePatch) {
        if let Some(cursor) = patch.cursor {
            self.cursor = cursor;
        }
        if let Some(buffer) = patch.buffer {
            self.buffer = buffer;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
    }

    /// Inclusive bounds of `field` under the current format.
    pub fn field_bounds(&self, field: TimeField) -> (u8, u8) {
        match field {
            TimeField::Hours => self.format.hour_bounds(),
            TimeField::Minutes => (0, MINUTE_MAX),
            TimeField::Seconds => (0, SECOND_MAX),
        }
    }
}

fn clamp_field(value: i32, min: u8, max: u8) -> u8 {
    // Bounds fit in u8, so the clamped value does too.
    value.clamp(i32::from(min), i32::from(max)) as u8
}
