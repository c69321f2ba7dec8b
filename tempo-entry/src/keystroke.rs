//! Digit-by-digit time entry.
//!
//! A first digit that can only be a tens digit for the field under the cursor
//! is placed as such (`2` in 24-hour hours shows `20`) and kept in the input
//! buffer; any other first digit completes the field. A second digit is
//! combined with the buffered one and either completes the field or is
//! rejected, which resets the buffer and leaves the committed value alone.
//!
//! Completing hours moves the cursor to the first active of minutes then
//! seconds; completing minutes moves it to seconds then hours. Seconds is the
//! last field and keeps the cursor, except that a rejected second digit there
//! moves the cursor to hours then minutes.

use crate::{
    state::{InputBuffer, PickerState, PickerStatePatch},
    time::{TimeField, TimeFormat},
};

/// What a single key did to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A value was committed and the buffer is waiting for a second digit.
    Provisional,
    /// A value was committed and the field is complete.
    Completed,
    /// The combined digits were out of range; the buffer was reset.
    Rejected,
    /// The key is not a digit or no rule applies. Nothing changed.
    Ignored,
}

impl KeyOutcome {
    /// Whether the key was consumed by the picker.
    pub fn handled(self) -> bool {
        matches!(self, KeyOutcome::Provisional | KeyOutcome::Completed)
    }

    /// Whether a field value was written.
    pub fn committed(self) -> bool {
        self.handled()
    }
}

/// Parses a key into a single decimal digit.
pub fn key_digit(key: char) -> Option<u8> {
    key.to_digit(10).map(|digit| digit as u8)
}

/// Runs one digit through the entry rules, mutating `state` in place.
pub(crate) fn apply_digit(state: &mut PickerState, digit: u8) -> KeyOutcome {
    if state.buffer.len() >= 2 {
        return KeyOutcome::Ignored;
    }
    let buffer = state.buffer.with_digit(digit);
    match state.cursor {
        TimeField::Hours => hours_digit(state, buffer, digit),
        TimeField::Minutes => minutes_digit(state, buffer, digit),
        TimeField::Seconds => seconds_digit(state, buffer, digit),
    }
}

fn hours_digit(state: &mut PickerState, buffer: InputBuffer, digit: u8) -> KeyOutcome {
    let next = state
        .fields
        .first_active([TimeField::Minutes, TimeField::Seconds], TimeField::Hours);

    if buffer.len() == 1 {
        match (state.format, digit) {
            (TimeFormat::TwentyFourHour, 0..=2) => {
                state.set_hours(i32::from(digit) * 10);
                state.buffer = buffer;
                KeyOutcome::Provisional
            }
            // Shown while waiting for the second digit even though 0 is not
            // a settled 12-hour value.
            (TimeFormat::AmPm, 0) => {
                state.set_provisional_hours(0);
                state.buffer = buffer;
                KeyOutcome::Provisional
            }
            (TimeFormat::AmPm, 1) => {
                state.set_hours(10);
                state.buffer = buffer;
                KeyOutcome::Provisional
            }
            _ => {
                state.set_hours(i32::from(digit));
                state.set_cursor(next);
                KeyOutcome::Completed
            }
        }
    } else {
        let combined = buffer.value();
        let (min, max) = state.format.hour_bounds();
        if (min..=max).contains(&combined) {
            state.set_hours(i32::from(combined));
            state.set_cursor(next);
            KeyOutcome::Completed
        } else {
            state.buffer.clear();
            KeyOutcome::Rejected
        }
    }
}

fn minutes_digit(state: &mut PickerState, buffer: InputBuffer, digit: u8) -> KeyOutcome {
    let next = state
        .fields
        .first_active([TimeField::Seconds, TimeField::Hours], TimeField::Minutes);

    if buffer.len() == 1 {
        if digit <= 5 {
            state.set_minutes(
                i32::from(digit) * 10,
                PickerStatePatch {
                    buffer: Some(buffer),
                    ..Default::default()
                },
            );
            KeyOutcome::Provisional
        } else {
            state.set_minutes(i32::from(digit), PickerStatePatch::advance_to(next));
            KeyOutcome::Completed
        }
    } else {
        let combined = buffer.value();
        // The first digit is at most 5, so this only fails if the buffer was
        // filled some other way.
        if combined <= 59 {
            state.set_minutes(i32::from(combined), PickerStatePatch::advance_to(next));
            KeyOutcome::Completed
        } else {
            state.buffer.clear();
            KeyOutcome::Rejected
        }
    }
}

fn seconds_digit(state: &mut PickerState, buffer: InputBuffer, digit: u8) -> KeyOutcome {
    if buffer.len() == 1 {
        if digit <= 5 {
            state.set_seconds(i32::from(digit) * 10);
            state.buffer = buffer;
            KeyOutcome::Provisional
        } else {
            state.set_seconds(i32::from(digit));
            state.buffer.clear();
            KeyOutcome::Completed
        }
    } else {
        let combined = buffer.value();
        if combined <= 59 {
            state.set_seconds(i32::from(combined));
            state.buffer.clear();
            KeyOutcome::Completed
        } else {
            let next = state
                .fields
                .first_active([TimeField::Hours, TimeField::Minutes], TimeField::Seconds);
            state.set_cursor(next);
            KeyOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{FieldSet, TimeValue, TimeValuePatch};

    fn state(format: TimeFormat, fields: FieldSet) -> PickerState {
        PickerState::new(
            format,
            fields,
            TimeValue::from_defaults(format, &TimeValuePatch::default()),
        )
    }

    fn feed(state: &mut PickerState, keys: &str) -> Vec<KeyOutcome> {
        keys.chars()
            .map(|key| match key_digit(key) {
                Some(digit) => apply_digit(state, digit),
                None => KeyOutcome::Ignored,
            })
            .collect()
    }

    #[test]
    fn key_digit_accepts_only_ascii_digits() {
        assert_eq!(key_digit('7'), Some(7));
        assert_eq!(key_digit('a'), None);
        assert_eq!(key_digit('٣'), None);
    }

    #[test]
    fn high_first_hour_digit_completes_and_advances() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::ALL);
        assert_eq!(feed(&mut s, "9"), [KeyOutcome::Completed]);
        assert_eq!(s.time.hours, 9);
        assert_eq!(s.cursor, TimeField::Minutes);

        // The next digit now lands in minutes.
        assert_eq!(feed(&mut s, "9"), [KeyOutcome::Completed]);
        assert_eq!(s.time.minutes, 9);
        assert_eq!(s.time.hours, 9);
        assert_eq!(s.cursor, TimeField::Seconds);
    }

    #[test]
    fn out_of_range_24_hour_pair_is_rejected_in_place() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::ALL);
        assert_eq!(feed(&mut s, "2"), [KeyOutcome::Provisional]);
        assert_eq!(s.time.hours, 20);
        assert_eq!(s.buffer.to_string(), "2");

        assert_eq!(feed(&mut s, "5"), [KeyOutcome::Rejected]);
        assert_eq!(s.time.hours, 20);
        assert!(s.buffer.is_empty());
        assert_eq!(s.cursor, TimeField::Hours);
    }

    #[test]
    fn valid_24_hour_pair_completes() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::new(true, false, true));
        feed(&mut s, "23");
        assert_eq!(s.time.hours, 23);
        assert_eq!(s.cursor, TimeField::Seconds);
        assert!(s.buffer.is_empty());
    }

    #[test]
    fn hours_stay_put_when_nothing_else_is_active() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::new(true, false, false));
        assert_eq!(feed(&mut s, "4"), [KeyOutcome::Completed]);
        assert_eq!(s.cursor, TimeField::Hours);
    }

    #[test]
    fn twelve_hour_one_waits_for_second_digit() {
        let mut s = state(TimeFormat::AmPm, FieldSet::ALL);
        assert_eq!(feed(&mut s, "1"), [KeyOutcome::Provisional]);
        assert_eq!(s.time.hours, 10);
        assert_eq!(s.cursor, TimeField::Hours);

        assert_eq!(feed(&mut s, "0"), [KeyOutcome::Completed]);
        assert_eq!(s.time.hours, 10);
        assert_eq!(s.cursor, TimeField::Minutes);
    }

    #[test]
    fn twelve_hour_thirteen_is_rejected() {
        let mut s = state(TimeFormat::AmPm, FieldSet::ALL);
        assert_eq!(feed(&mut s, "13"), [KeyOutcome::Provisional, KeyOutcome::Rejected]);
        assert_eq!(s.time.hours, 10);
        assert_eq!(s.cursor, TimeField::Hours);
    }

    #[test]
    fn twelve_hour_direct_digit_completes() {
        let mut s = state(TimeFormat::AmPm, FieldSet::ALL);
        assert_eq!(feed(&mut s, "7"), [KeyOutcome::Completed]);
        assert_eq!(s.time.hours, 7);
        assert_eq!(s.cursor, TimeField::Minutes);
    }

    // The leading zero writes hour 0, outside the settled 12-hour range.
    // Pinned as-is until the intended behaviour is confirmed.
    #[test]
    fn twelve_hour_leading_zero_is_a_transient_zero() {
        let mut s = state(TimeFormat::AmPm, FieldSet::ALL);
        assert_eq!(feed(&mut s, "0"), [KeyOutcome::Provisional]);
        assert_eq!(s.time.hours, 0);
        assert_eq!(s.buffer.to_string(), "0");

        assert_eq!(feed(&mut s, "9"), [KeyOutcome::Completed]);
        assert_eq!(s.time.hours, 9);

        // "00" is rejected and leaves the transient zero behind.
        let mut s = state(TimeFormat::AmPm, FieldSet::ALL);
        assert_eq!(feed(&mut s, "00"), [KeyOutcome::Provisional, KeyOutcome::Rejected]);
        assert_eq!(s.time.hours, 0);
        assert_eq!(s.cursor, TimeField::Hours);
    }

    #[test]
    fn minutes_smart_placement() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::ALL);
        s.set_cursor(TimeField::Minutes);
        assert_eq!(feed(&mut s, "4"), [KeyOutcome::Provisional]);
        assert_eq!(s.time.minutes, 40);
        assert_eq!(feed(&mut s, "2"), [KeyOutcome::Completed]);
        assert_eq!(s.time.minutes, 42);
        assert_eq!(s.cursor, TimeField::Seconds);
        assert!(s.buffer.is_empty());
    }

    #[test]
    fn minutes_advance_to_hours_without_seconds() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::new(true, true, false));
        s.set_cursor(TimeField::Minutes);
        assert_eq!(feed(&mut s, "7"), [KeyOutcome::Completed]);
        assert_eq!(s.time.minutes, 7);
        assert_eq!(s.cursor, TimeField::Hours);
    }

    #[test]
    fn seconds_never_advance_on_success() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::ALL);
        s.set_cursor(TimeField::Seconds);
        assert_eq!(feed(&mut s, "8"), [KeyOutcome::Completed]);
        assert_eq!(s.time.seconds, 8);
        assert_eq!(s.cursor, TimeField::Seconds);

        assert_eq!(feed(&mut s, "59"), [KeyOutcome::Provisional, KeyOutcome::Completed]);
        assert_eq!(s.time.seconds, 59);
        assert_eq!(s.cursor, TimeField::Seconds);
    }

    // Seconds moves the cursor on rejection while hours and minutes do not.
    #[test]
    fn seconds_rejection_moves_cursor() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::new(false, true, true));
        s.set_cursor(TimeField::Seconds);
        s.buffer = InputBuffer::default().with_digit(7);
        assert_eq!(apply_digit(&mut s, 0), KeyOutcome::Rejected);
        assert_eq!(s.cursor, TimeField::Minutes);
        assert!(s.buffer.is_empty());
        assert_eq!(s.time.seconds, 45);
    }

    #[test]
    fn minutes_rejection_keeps_cursor() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::ALL);
        s.set_cursor(TimeField::Minutes);
        s.buffer = InputBuffer::default().with_digit(6);
        assert_eq!(apply_digit(&mut s, 5), KeyOutcome::Rejected);
        assert_eq!(s.cursor, TimeField::Minutes);
        assert_eq!(s.time.minutes, 30);
    }

    #[test]
    fn full_buffer_ignores_digit() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::ALL);
        s.buffer = InputBuffer::default().with_digit(1).with_digit(1);
        let before = s.clone();
        assert_eq!(apply_digit(&mut s, 1), KeyOutcome::Ignored);
        assert_eq!(s, before);
    }

    #[test]
    fn stale_cursor_still_routes_digits() {
        let mut s = state(TimeFormat::TwentyFourHour, FieldSet::new(true, false, false));
        s.set_cursor(TimeField::Minutes);
        assert_eq!(feed(&mut s, "8"), [KeyOutcome::Completed]);
        assert_eq!(s.time.minutes, 8);
        assert_eq!(s.cursor, TimeField::Hours);
    }

    #[test]
    fn empty_field_set_does_not_panic() {
        let mut s = state(TimeFormat::AmPm, FieldSet::default());
        let outcomes = feed(&mut s, "1234567890");
        assert!(outcomes.iter().all(|o| *o != KeyOutcome::Ignored));
        assert_eq!(s.cursor, TimeField::Hours);
    }
}
