/*!
 * Error types for the subrip library.
 *
 * Parsing never recovers from a malformed line: the first failure is returned
 * as a `ParseError` carrying the kind, the 1-based line number and the raw
 * line text. Errors are defined with the thiserror crate so callers can match
 * on the kind instead of inspecting messages.
 */

use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced when decomposing a single `HH:MM:SS,mmm` string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// The string does not split into exactly a clock part and a millisecond part
    #[error("expected exactly one ',' before the milliseconds in '{0}'")]
    MissingMilliseconds(String),

    /// The clock part does not have exactly three ':'-separated fields
    #[error("expected HH:MM:SS before the ',' in '{0}'")]
    WrongFieldCount(String),

    /// A field is not a non-negative integer
    #[error("invalid {field} field '{value}'")]
    InvalidField {
        /// Which field failed (hour, minute, second, millisecond)
        field: &'static str,
        /// The text that could not be converted
        value: String,
        /// Integer conversion failure
        #[source]
        source: ParseIntError,
    },
}

/// What went wrong on the line a `ParseError` points at
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line expected to hold the cue index is not an integer
    #[error("invalid index line: must be numeric")]
    InvalidIndexLine,

    /// The timecode line does not split into two parts on " --> "
    #[error("invalid timecode separator")]
    MissingTimecodeArrow,

    /// A timecode does not have the HH:MM:SS,mmm shape
    #[error("invalid timecode format")]
    InvalidTimecodeFormat,

    /// A correctly shaped timecode holds a non-numeric field
    #[error("invalid timecode: {0}")]
    TimecodeFieldParseError(#[source] TimecodeError),

    /// An index line reached end of input without a timecode line
    #[error("incomplete cue block: index line without a timecode line")]
    IncompleteBlock,
}

/// A parse failure located in the source document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}: '{content}'")]
pub struct ParseError {
    /// Error category
    pub kind: ParseErrorKind,
    /// 1-based line number of the offending line
    pub line: usize,
    /// The offending line with trailing whitespace removed
    pub content: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, content: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            content: content.into(),
        }
    }
}

/// Errors from the reader and file adapters
#[derive(Error, Debug)]
pub enum SrtError {
    /// Reading or decoding the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was read but is not valid SRT
    #[error("SRT parse error: {0}")]
    Parse(#[from] ParseError),
}

impl SrtError {
    /// The parse error, if this is one
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}
