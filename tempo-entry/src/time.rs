//! Time values, formats and the fields a picker can edit.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;
use thiserror::Error;

/// Indicates whether a 12-hour time is before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl DayPeriod {
    /// Returns the opposite period.
    pub fn toggled(self) -> Self {
        match self {
            DayPeriod::Am => DayPeriod::Pm,
            DayPeriod::Pm => DayPeriod::Am,
        }
    }

    /// Returns the period letters shown to the user.
    pub fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayPeriod {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(DayPeriod::Am),
            "PM" => Ok(DayPeriod::Pm),
            other => Err(ParseTimeError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Clock format used by a picker. Fixed for the picker's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Hours run from 0 to 23 and no period is shown.
    TwentyFourHour,
    /// Hours run from 1 to 12 followed by an AM/PM period.
    #[default]
    AmPm,
}

impl TimeFormat {
    /// Inclusive hour bounds once a value has settled.
    pub fn hour_bounds(self) -> (u8, u8) {
        match self {
            TimeFormat::TwentyFourHour => (0, 23),
            TimeFormat::AmPm => (1, 12),
        }
    }

    /// Returns `true` when the format carries an AM/PM period.
    pub fn has_period(self) -> bool {
        matches!(self, TimeFormat::AmPm)
    }
}

impl FromStr for TimeFormat {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "24hr" | "24" => Ok(TimeFormat::TwentyFourHour),
            "am/pm" | "am-pm" | "ampm" | "12h" | "12hr" => Ok(TimeFormat::AmPm),
            other => Err(ParseTimeError::InvalidFormat(other.to_string())),
        }
    }
}

/// One editable component of a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// The hour component.
    Hours,
    /// The minute component.
    Minutes,
    /// The second component.
    Seconds,
}

impl TimeField {
    /// All fields in display order.
    pub const ALL: [TimeField; 3] = [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    /// Human readable column label.
    pub fn label(self) -> &'static str {
        match self {
            TimeField::Hours => "Hours",
            TimeField::Minutes => "Minutes",
            TimeField::Seconds => "Seconds",
        }
    }
}

/// The set of fields a picker shows and accepts input for.
///
/// Any combination is accepted, including the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet {
    /// Whether the hour field is active.
    pub hours: bool,
    /// Whether the minute field is active.
    pub minutes: bool,
    /// Whether the second field is active.
    pub seconds: bool,
}

impl FieldSet {
    /// Every field active.
    pub const ALL: FieldSet = FieldSet {
        hours: true,
        minutes: true,
        seconds: true,
    };

    /// Creates a field set from explicit flags.
    pub fn new(hours: bool, minutes: bool, seconds: bool) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns whether `field` is active.
    pub fn contains(&self, field: TimeField) -> bool {
        match field {
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
            TimeField::Seconds => self.seconds,
        }
    }

    /// Active fields in display order.
    pub fn active(&self) -> SmallVec<[TimeField; 3]> {
        TimeField::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }

    /// Picks the first active field from `candidates`, or `fallback`.
    pub fn first_active(&self, candidates: [TimeField; 2], fallback: TimeField) -> TimeField {
        candidates
            .into_iter()
            .find(|field| self.contains(*field))
            .unwrap_or(fallback)
    }
}

impl FromIterator<TimeField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = TimeField>>(iter: I) -> Self {
        let mut set = FieldSet::default();
        for field in iter {
            match field {
                TimeField::Hours => set.hours = true,
                TimeField::Minutes => set.minutes = true,
                TimeField::Seconds => set.seconds = true,
            }
        }
        set
    }
}

/// A wall clock time as shown by a picker.
///
/// `period` is `Some` exactly when the owning picker uses [`TimeFormat::AmPm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeValue {
    /// Hour component; its range depends on the picker format.
    pub hours: u8,
    /// Minute component (0-59).
    pub minutes: u8,
    /// Second component (0-59).
    pub seconds: u8,
    /// AM/PM period for 12-hour pickers.
    pub period: Option<DayPeriod>,
}

impl TimeValue {
    pub(crate) const DEFAULT_HOURS: u8 = 8;
    pub(crate) const DEFAULT_MINUTES: u8 = 30;
    pub(crate) const DEFAULT_SECONDS: u8 = 45;
    pub(crate) const DEFAULT_PERIOD: DayPeriod = DayPeriod::Pm;

    /// Builds the initial value for a picker from a partial default.
    pub fn from_defaults(format: TimeFormat, defaults: &TimeValuePatch) -> Self {
        Self {
            hours: defaults.hours.unwrap_or(Self::DEFAULT_HOURS),
            minutes: defaults.minutes.unwrap_or(Self::DEFAULT_MINUTES),
            seconds: defaults.seconds.unwrap_or(Self::DEFAULT_SECONDS),
            period: format
                .has_period()
                .then(|| defaults.period.unwrap_or(Self::DEFAULT_PERIOD)),
        }
    }

    /// Reads one numeric field.
    pub fn field(&self, field: TimeField) -> u8 {
        match field {
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
            TimeField::Seconds => self.seconds,
        }
    }

    /// Returns a copy with `patch` merged over it. No range checks are applied.
    pub fn merged(mut self, patch: &TimeValuePatch) -> Self {
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(minutes) = patch.minutes {
            self.minutes = minutes;
        }
        if let Some(seconds) = patch.seconds {
            self.seconds = seconds;
        }
        if let Some(period) = patch.period {
            self.period = Some(period);
        }
        self
    }
}

/// A partial [`TimeValue`]. Missing components keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeValuePatch {
    /// Replacement hour.
    pub hours: Option<u8>,
    /// Replacement minute.
    pub minutes: Option<u8>,
    /// Replacement second.
    pub seconds: Option<u8>,
    /// Replacement period.
    pub period: Option<DayPeriod>,
}

impl TimeValuePatch {
    /// Sets the hour component.
    pub fn hours(mut self, hours: u8) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Sets the minute component.
    pub fn minutes(mut self, minutes: u8) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Sets the second component.
    pub fn seconds(mut self, seconds: u8) -> Self {
        self.seconds = Some(seconds);
        self
    }

    /// Sets the period.
    pub fn period(mut self, period: DayPeriod) -> Self {
        self.period = Some(period);
        self
    }
}

impl From<TimeValue> for TimeValuePatch {
    fn from(value: TimeValue) -> Self {
        Self {
            hours: Some(value.hours),
            minutes: Some(value.minutes),
            seconds: Some(value.seconds),
            period: value.period,
        }
    }
}

/// Errors produced while parsing time related text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    /// The input had no time components.
    #[error("empty time string")]
    Empty,
    /// More than three `:` separated components were given.
    #[error("too many time components in `{0}`")]
    TooManyComponents(String),
    /// A component was not a number in 0..=99.
    #[error("invalid time component `{0}`")]
    InvalidComponent(String),
    /// The period was not `AM` or `PM`.
    #[error("invalid period `{0}`, expected AM or PM")]
    InvalidPeriod(String),
    /// The format name was not recognised.
    #[error("unknown time format `{0}`, expected `24h` or `am-pm`")]
    InvalidFormat(String),
}

/// Parses `HH[:MM[:SS]] [AM|PM]`. Ranges are not checked.
impl FromStr for TimeValuePatch {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let clock = parts.next().ok_or(ParseTimeError::Empty)?;
        let period = parts.next().map(str::parse::<DayPeriod>).transpose()?;
        if let Some(extra) = parts.next() {
            return Err(ParseTimeError::TooManyComponents(extra.to_string()));
        }

        let components = clock
            .split(':')
            .map(|part| {
                if part.is_empty() || part.len() > 2 {
                    return Err(ParseTimeError::InvalidComponent(part.to_string()));
                }
                part.parse::<u8>()
                    .map_err(|_| ParseTimeError::InvalidComponent(part.to_string()))
            })
            .collect::<Result<SmallVec<[u8; 3]>, _>>()?;
        if components.len() > 3 {
            return Err(ParseTimeError::TooManyComponents(clock.to_string()));
        }

        Ok(TimeValuePatch {
            hours: components.first().copied(),
            minutes: components.get(1).copied(),
            seconds: components.get(2).copied(),
            period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_format() {
        let am_pm = TimeValue::from_defaults(TimeFormat::AmPm, &TimeValuePatch::default());
        assert_eq!(
            am_pm,
            TimeValue {
                hours: 8,
                minutes: 30,
                seconds: 45,
                period: Some(DayPeriod::Pm),
            }
        );

        let day = TimeValue::from_defaults(
            TimeFormat::TwentyFourHour,
            &TimeValuePatch::default().hours(17).period(DayPeriod::Am),
        );
        assert_eq!(day.hours, 17);
        assert_eq!(day.period, None);
    }

    #[test]
    fn first_active_respects_priority() {
        let set = FieldSet::new(true, false, true);
        assert_eq!(
            set.first_active([TimeField::Minutes, TimeField::Seconds], TimeField::Hours),
            TimeField::Seconds
        );
        let empty = FieldSet::default();
        assert_eq!(
            empty.first_active([TimeField::Minutes, TimeField::Seconds], TimeField::Hours),
            TimeField::Hours
        );
    }

    #[test]
    fn active_fields_keep_display_order() {
        let set: FieldSet = [TimeField::Seconds, TimeField::Hours].into_iter().collect();
        assert_eq!(set.active().as_slice(), &[TimeField::Hours, TimeField::Seconds]);
        assert!(FieldSet::default().active().is_empty());
    }

    #[test]
    fn parse_patch() {
        let patch: TimeValuePatch = "7:05 am".parse().unwrap();
        assert_eq!(patch.hours, Some(7));
        assert_eq!(patch.minutes, Some(5));
        assert_eq!(patch.seconds, None);
        assert_eq!(patch.period, Some(DayPeriod::Am));

        assert_eq!("".parse::<TimeValuePatch>(), Err(ParseTimeError::Empty));
        assert!(matches!(
            "1:2:3:4".parse::<TimeValuePatch>(),
            Err(ParseTimeError::TooManyComponents(_))
        ));
        assert!(matches!(
            "1x:00".parse::<TimeValuePatch>(),
            Err(ParseTimeError::InvalidComponent(_))
        ));
        assert!(matches!(
            "10:00 noon".parse::<TimeValuePatch>(),
            Err(ParseTimeError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn parse_format_names() {
        assert_eq!("24h".parse::<TimeFormat>(), Ok(TimeFormat::TwentyFourHour));
        assert_eq!("AM/PM".parse::<TimeFormat>(), Ok(TimeFormat::AmPm));
        assert!("weekday".parse::<TimeFormat>().is_err());
    }

    #[test]
    fn merge_keeps_missing_components() {
        let value = TimeValue {
            hours: 1,
            minutes: 2,
            seconds: 3,
            period: Some(DayPeriod::Am),
        };
        let merged = value.merged(&TimeValuePatch::default().minutes(99));
        assert_eq!(merged.hours, 1);
        assert_eq!(merged.minutes, 99);
        assert_eq!(merged.period, Some(DayPeriod::Am));
    }
}
