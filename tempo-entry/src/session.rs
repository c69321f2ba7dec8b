//! Scoped access to the active picker from view code.
//!
//! A view provides its picker for the duration of a closure; nested view
//! helpers fetch it with [`use_time_picker`] instead of threading it through
//! every call.

use std::cell::RefCell;

use thiserror::Error;

use crate::picker::TimePicker;

thread_local! {
    static PICKER_STACK: RefCell<Vec<TimePicker>> = const { RefCell::new(Vec::new()) };
}

/// Errors from looking up the active picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No picker was provided on this thread.
    #[error("use_time_picker must be called within provide_time_picker")]
    NoActivePicker,
}

/// Makes `picker` the active picker while `f` runs.
///
/// Providers nest; the innermost one wins.
///
/// # Examples
///
/// ```
/// use tempo_entry::{FieldSet, TimePicker, TimePickerArgs, provide_time_picker, use_time_picker};
///
/// let picker = TimePicker::new(TimePickerArgs::new(FieldSet::ALL));
/// provide_time_picker(picker.clone(), || {
///     assert_eq!(use_time_picker(), picker);
/// });
/// ```
pub fn provide_time_picker<F, R>(picker: TimePicker, f: F) -> R
where
    F: FnOnce() -> R,
{
    PICKER_STACK.with(|stack| stack.borrow_mut().push(picker));
    struct SessionScopeGuard;
    impl Drop for SessionScopeGuard {
        fn drop(&mut self) {
            PICKER_STACK.with(|stack| {
                let popped = stack.borrow_mut().pop();
                debug_assert!(popped.is_some(), "Picker stack underflow");
            });
        }
    }
    let guard = SessionScopeGuard;
    let result = f();
    drop(guard);
    result
}

/// Returns the active picker, if any.
pub fn try_use_time_picker() -> Result<TimePicker, SessionError> {
    PICKER_STACK.with(|stack| stack.borrow().last().cloned().ok_or(SessionError::NoActivePicker))
}

/// Returns the active picker.
///
/// # Panics
///
/// Panics when called outside [`provide_time_picker`]; that is a usage error.
pub fn use_time_picker() -> TimePicker {
    match try_use_time_picker() {
        Ok(picker) => picker,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args::TimePickerArgs, time::FieldSet};

    fn picker() -> TimePicker {
        TimePicker::new(TimePickerArgs::new(FieldSet::ALL))
    }

    #[test]
    fn missing_provider_is_an_error() {
        assert_eq!(try_use_time_picker(), Err(SessionError::NoActivePicker));
    }

    #[test]
    #[should_panic(expected = "use_time_picker must be called within provide_time_picker")]
    fn use_outside_provider_panics() {
        let _ = use_time_picker();
    }

    #[test]
    fn innermost_provider_wins() {
        let outer = picker();
        let inner = picker();
        provide_time_picker(outer.clone(), || {
            assert_eq!(use_time_picker(), outer);
            provide_time_picker(inner.clone(), || {
                assert_eq!(use_time_picker(), inner);
            });
            assert_eq!(use_time_picker(), outer);
        });
        assert!(try_use_time_picker().is_err());
    }

    #[test]
    fn provider_scope_ends_on_panic() {
        let result = std::panic::catch_unwind(|| {
            provide_time_picker(picker(), || panic!("view failed"));
        });
        assert!(result.is_err());
        assert!(try_use_time_picker().is_err());
    }
}
