//! Construction arguments for [`TimePicker`](crate::TimePicker).

use derive_setters::Setters;

use crate::{
    callback::{Listener, PickerListeners},
    time::{FieldSet, TimeFormat, TimeValue, TimeValuePatch},
};

/// Configuration applied once when a picker is created.
///
/// `should_include` has no default and is passed to [`TimePickerArgs::new`].
#[derive(Clone, PartialEq, Debug, Setters)]
pub struct TimePickerArgs {
    /// Clock format for the picker's whole lifetime.
    pub format: TimeFormat,
    /// Initial value; missing parts fall back to 08:30:45 PM.
    pub default_time: TimeValuePatch,
    /// Fields shown and accepting input.
    #[setters(skip)]
    pub should_include: FieldSet,
    /// Outbound notifications.
    #[setters(skip)]
    pub listeners: PickerListeners,
}

impl TimePickerArgs {
    /// Creates arguments for the given active fields with default format and time.
    pub fn new(should_include: FieldSet) -> Self {
        Self {
            format: TimeFormat::default(),
            default_time: TimeValuePatch::default(),
            should_include,
            listeners: PickerListeners::default(),
        }
    }

    /// Sets the callback fired on every committed change.
    pub fn on_time_change<F>(mut self, f: F) -> Self
    where
        F: Fn(TimeValue) + Send + Sync + 'static,
    {
        self.listeners.on_time_change = Listener::new(f);
        self
    }

    /// Sets the time-changed callback using a shared handle.
    pub fn on_time_change_shared(mut self, listener: impl Into<Listener<TimeValue>>) -> Self {
        self.listeners.on_time_change = listener.into();
        self
    }

    /// Sets the callback fired when visibility is written.
    pub fn on_visibility_change<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.listeners.on_visibility_change = Listener::new(f);
        self
    }

    /// Sets the visibility-changed callback using a shared handle.
    pub fn on_visibility_change_shared(mut self, listener: impl Into<Listener<bool>>) -> Self {
        self.listeners.on_visibility_change = listener.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::DayPeriod;

    #[test]
    fn setters_chain() {
        let args = TimePickerArgs::new(FieldSet::new(true, true, false))
            .format(TimeFormat::TwentyFourHour)
            .default_time(TimeValuePatch::default().hours(14));
        assert_eq!(args.format, TimeFormat::TwentyFourHour);
        assert_eq!(args.default_time.hours, Some(14));
        assert!(!args.should_include.seconds);
    }

    #[test]
    fn defaults_to_am_pm() {
        let args = TimePickerArgs::new(FieldSet::ALL);
        assert_eq!(args.format, TimeFormat::AmPm);
        let value = TimeValue::from_defaults(args.format, &args.default_time);
        assert_eq!(value.period, Some(DayPeriod::Pm));
    }

    #[test]
    fn shared_listener_keeps_identity() {
        let listener: Listener<bool> = Listener::new(|_| {});
        let args = TimePickerArgs::new(FieldSet::ALL).on_visibility_change_shared(listener.clone());
        assert_eq!(args.listeners.on_visibility_change, listener);
    }
}
