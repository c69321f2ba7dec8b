//! The picker handle shared between a view and its input adapters.

use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    args::TimePickerArgs,
    body::{self, ColumnKind, StepDirection, TimeColumn},
    callback::PickerListeners,
    format::{self, HighlightedTime},
    keystroke::{self, KeyOutcome},
    state::{PickerState, PickerStatePatch},
    time::{DayPeriod, TimeField, TimeValue, TimeValuePatch},
};

struct PickerInner {
    state: RwLock<PickerState>,
    listeners: PickerListeners,
}

/// Handle to one picker's state.
///
/// Clones share the same state, so view closures can each hold one. Every
/// operation reads the state once, writes the next state once and only then
/// runs the listeners, which may read the picker again.
#[derive(Clone)]
pub struct TimePicker {
    inner: Arc<PickerInner>,
}

impl PartialEq for TimePicker {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for TimePicker {}

impl std::fmt::Debug for TimePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimePicker")
            .field("state", &*self.inner.state.read())
            .finish_non_exhaustive()
    }
}

impl TimePicker {
    /// Creates a picker from its construction arguments.
    pub fn new(args: TimePickerArgs) -> Self {
        let time = TimeValue::from_defaults(args.format, &args.default_time);
        let state = PickerState::new(args.format, args.should_include, time);
        debug!(?state, "time picker created");
        Self {
            inner: Arc::new(PickerInner {
                state: RwLock::new(state),
                listeners: args.listeners,
            }),
        }
    }

    /// Execute a closure with a shared reference to the state.
    pub fn with<R>(&self, f: impl FnOnce(&PickerState) -> R) -> R {
        f(&self.inner.state.read())
    }

    /// Returns a copy of the whole state.
    pub fn snapshot(&self) -> PickerState {
        self.with(Clone::clone)
    }

    /// Returns the current time value.
    pub fn time(&self) -> TimeValue {
        self.with(|s| s.time)
    }

    /// Returns the cursor field.
    pub fn cursor(&self) -> TimeField {
        self.with(|s| s.cursor)
    }

    /// Returns whether the picker is shown.
    pub fn is_visible(&self) -> bool {
        self.with(|s| s.visible)
    }

    /// Sets the hour, clamped to the format's range.
    pub fn set_hours(&self, hours: i32) {
        self.commit(|s| {
            s.set_hours(hours);
            ((), true)
        });
    }

    /// Sets the minute, clamped to 0-59, writing `extra` in the same update.
    pub fn set_minutes(&self, minutes: i32, extra: PickerStatePatch) {
        self.commit(|s| {
            s.set_minutes(minutes, extra);
            ((), true)
        });
    }

    /// Sets the second, clamped to 0-59.
    pub fn set_seconds(&self, seconds: i32) {
        self.commit(|s| {
            s.set_seconds(seconds);
            ((), true)
        });
    }

    /// Sets the period. Does nothing for 24-hour pickers.
    pub fn set_period(&self, period: DayPeriod) {
        self.commit(|s| ((), s.set_period(period)));
    }

    /// Steps the hour up, wrapping.
    pub fn increment_hours(&self) {
        self.step(ColumnKind::Field(TimeField::Hours), StepDirection::Increment);
    }

    /// Steps the hour down, wrapping.
    pub fn decrement_hours(&self) {
        self.step(ColumnKind::Field(TimeField::Hours), StepDirection::Decrement);
    }

    /// Steps the minute up, wrapping.
    pub fn increment_minutes(&self) {
        self.step(ColumnKind::Field(TimeField::Minutes), StepDirection::Increment);
    }

    /// Steps the minute down, wrapping.
    pub fn decrement_minutes(&self) {
        self.step(ColumnKind::Field(TimeField::Minutes), StepDirection::Decrement);
    }

    /// Steps the second up, wrapping.
    pub fn increment_seconds(&self) {
        self.step(ColumnKind::Field(TimeField::Seconds), StepDirection::Increment);
    }

    /// Steps the second down, wrapping.
    pub fn decrement_seconds(&self) {
        self.step(ColumnKind::Field(TimeField::Seconds), StepDirection::Decrement);
    }

    /// Flips AM and PM when the picker has a period.
    pub fn toggle_period(&self) {
        self.step(ColumnKind::Period, StepDirection::Increment);
    }

    /// Applies a stepper press from the picker body.
    pub fn step(&self, column: ColumnKind, direction: StepDirection) {
        self.commit(|s| ((), body::apply_step(s, column, direction)));
    }

    /// Feeds one key to the entry state machine. Returns whether it was handled.
    pub fn handle_key(&self, key: char) -> bool {
        self.handle_key_outcome(key).handled()
    }

    /// Like [`handle_key`](Self::handle_key) but reports what happened.
    pub fn handle_key_outcome(&self, key: char) -> KeyOutcome {
        let Some(digit) = keystroke::key_digit(key) else {
            trace!(?key, "ignoring non-digit key");
            return KeyOutcome::Ignored;
        };
        self.commit(|s| {
            if !s.fields.contains(s.cursor) {
                warn!(cursor = ?s.cursor, "digit typed into an inactive field");
            }
            let from = s.cursor;
            let outcome = keystroke::apply_digit(s, digit);
            trace!(digit, ?outcome, buffer = %s.buffer, "key applied");
            if s.cursor != from {
                debug!(?from, to = ?s.cursor, "cursor advanced");
            }
            (outcome, outcome.committed())
        })
    }

    /// Moves the cursor and clears the input buffer.
    pub fn set_cursor(&self, field: TimeField) {
        self.commit(|s| {
            s.set_cursor(field);
            ((), false)
        });
    }

    /// Shows or hides the picker and notifies the visibility listener.
    pub fn set_visible(&self, visible: bool) {
        self.commit(|s| {
            s.visible = visible;
            ((), false)
        });
        debug!(visible, "visibility changed");
        self.inner.listeners.on_visibility_change.call(visible);
    }

    /// Merges `patch` into the current value as given, without range checks.
    ///
    /// This is a programmatic overwrite: cursor and buffer are untouched and
    /// the time listener is not called. The period is ignored for 24-hour
    /// pickers.
    pub fn set_time(&self, patch: TimeValuePatch) {
        self.commit(|s| {
            let mut patch = patch;
            if !s.format.has_period() {
                patch.period = None;
            }
            s.time = s.time.merged(&patch);
            ((), false)
        });
    }

    /// Formats `time`, or the current value, for display.
    pub fn format_plain(&self, time: Option<&TimeValue>) -> String {
        self.with(|s| format::format_plain(s, time))
    }

    /// Formats the current value with the cursor field marked.
    pub fn format_with_highlight(&self) -> HighlightedTime {
        self.with(format::format_with_highlight)
    }

    /// Columns of the picker body.
    pub fn columns(&self) -> SmallVec<[TimeColumn; 4]> {
        self.with(body::columns)
    }

    /// Runs `f` on a copy of the state and stores the copy in one write.
    /// When `f` reports a commit the time listener runs after the write.
    fn commit<R>(&self, f: impl FnOnce(&mut PickerState) -> (R, bool)) -> R {
        let (result, committed) = {
            let mut guard = self.inner.state.write();
            let mut next = guard.clone();
            let (result, committed) = f(&mut next);
            *guard = next;
            (result, committed.then_some(guard.time))
        };
        if let Some(time) = committed {
            debug!(?time, "time committed");
            self.inner.listeners.on_time_change.call(time);
        }
        result
    }
}
