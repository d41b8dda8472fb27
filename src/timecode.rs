use std::fmt;
use std::str::FromStr;

use crate::errors::TimecodeError;

// @module: SRT timecodes (HH:MM:SS,mmm)

/// Length of a timecode in canonical form
pub const TIMECODE_LEN: usize = 12;

// @struct: Point in time as written in an SRT file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timecode {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl Timecode {
    /// Total offset in milliseconds. Fields are not range checked, so a
    /// minute of 99 simply contributes 99 minutes.
    pub fn total_milliseconds(&self) -> u64 {
        u64::from(self.hour) * 3_600_000
            + u64::from(self.minute) * 60_000
            + u64::from(self.second) * 1_000
            + u64::from(self.millisecond)
    }
}

// @checks: Structural shape only; fields are not checked for digits
pub fn has_timecode_shape(text: &str) -> bool {
    text.len() == TIMECODE_LEN
        && text.matches(':').count() == 2
        && text.matches(',').count() == 1
}

/// Parse a `HH:MM:SS,mmm` string into its numeric fields
pub fn parse_timecode(text: &str) -> Result<Timecode, TimecodeError> {
    let (clock, millis) = match text.split(',').collect::<Vec<_>>()[..] {
        [clock, millis] => (clock, millis),
        _ => return Err(TimecodeError::MissingMilliseconds(text.to_string())),
    };

    let (hour, minute, second) = match clock.split(':').collect::<Vec<_>>()[..] {
        [h, m, s] => (h, m, s),
        _ => return Err(TimecodeError::WrongFieldCount(text.to_string())),
    };

    Ok(Timecode {
        hour: parse_field("hour", hour)?,
        minute: parse_field("minute", minute)?,
        second: parse_field("second", second)?,
        millisecond: parse_field("millisecond", millis)?,
    })
}

/// Render a timecode as `HH:MM:SS,mmm`
pub fn format_timecode(timecode: &Timecode) -> String {
    timecode.to_string()
}

fn parse_field(field: &'static str, value: &str) -> Result<u32, TimecodeError> {
    value.parse::<u32>().map_err(|source| TimecodeError::InvalidField {
        field,
        value: value.to_string(),
        source,
    })
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timecode(s)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}
