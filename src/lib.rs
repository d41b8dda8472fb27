/*!
 * # subrip - SubRip (SRT) subtitle parser
 *
 * A Rust library for reading SRT subtitle files into timed cues, with
 * line-accurate validation errors.
 *
 * ## Features
 *
 * - Strict three-line block grammar (index, `start --> end`, caption text)
 * - Fails on the first malformed line with a typed, line-numbered error
 * - `HH:MM:SS,mmm` timecode parsing and formatting
 * - Thin adapters for readers and files
 * - `subrip check` command line validator
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `parser`: The SRT state machine
 * - `timecode`: Timecode parsing and formatting
 * - `subtitle_processor`: Cue records and input adapters
 * - `errors`: Error types for the library
 * - `app_config`: Validator configuration
 * - `file_utils`: File system operations
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod parser;
pub mod subtitle_processor;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ParseError, ParseErrorKind, SrtError, TimecodeError};
pub use parser::{SrtParser, parse};
pub use subtitle_processor::{Cue, SubtitleCollection};
pub use timecode::{Timecode, format_timecode, parse_timecode};
