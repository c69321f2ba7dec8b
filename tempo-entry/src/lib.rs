//! State machine behind a time picker widget.
//!
//! A [`TimePicker`] owns a time value, its clock format, the fields being
//! edited, a cursor and a small digit buffer. Views render what it formats
//! and forward pointer and keyboard input to it; it never draws anything.
//!
//! # Example
//!
//! ```
//! use tempo_entry::{FieldSet, TimeField, TimeFormat, TimePicker, TimePickerArgs};
//!
//! let picker = TimePicker::new(
//!     TimePickerArgs::new(FieldSet::new(true, true, false))
//!         .format(TimeFormat::TwentyFourHour)
//!         .on_time_change(|time| println!("now {}:{}", time.hours, time.minutes)),
//! );
//!
//! // `1` is placed as a tens digit and waits for the next key.
//! assert!(picker.handle_key('1'));
//! assert_eq!(picker.format_plain(None), "10:30");
//!
//! // `7` completes the hour and moves on to minutes.
//! assert!(picker.handle_key('7'));
//! assert_eq!(picker.cursor(), TimeField::Minutes);
//! assert_eq!(picker.format_plain(None), "17:30");
//!
//! picker.increment_minutes();
//! assert_eq!(picker.format_with_highlight().display, "17:31:");
//! ```

pub mod args;
pub mod body;
pub mod callback;
pub mod format;
pub mod keystroke;
pub mod picker;
pub mod session;
pub mod state;
pub mod time;


pub use args::TimePickerArgs;
pub use body::{ColumnKind, StepDirection, TimeColumn};
pub use callback::{Listener, PickerListeners};
pub use format::HighlightedTime;
pub use keystroke::KeyOutcome;
pub use picker::TimePicker;
pub use session::{SessionError, provide_time_picker, try_use_time_picker, use_time_picker};
pub use state::{InputBuffer, PickerState, PickerStatePatch};
pub use time::{DayPeriod, FieldSet, ParseTimeError, TimeField, TimeFormat, TimeValue, TimeValuePatch};
