/*!
 * Line-oriented SRT parser.
 *
 * An SRT document is a sequence of blank-line separated blocks, each made of
 * an index line, a `start --> end` timecode line and one or more text lines.
 * The parser walks the lines once with a three-state machine and fails on the
 * first malformed line; it never returns a partial result.
 */

use log::{debug, warn};

use crate::errors::{ParseError, ParseErrorKind};
use crate::subtitle_processor::Cue;
use crate::timecode::{Timecode, has_timecode_shape, parse_timecode};

/// Separator between the two timecodes of a timecode line
pub const TIMECODE_ARROW: &str = " --> ";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Where the parser is inside the current cue block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Between blocks, expecting an index line
    AwaitingIndex,
    /// Index consumed, expecting the timecode line
    AwaitingTimecode,
    /// Timecodes consumed, collecting caption lines
    AccumulatingText,
}

// @struct: Cue under construction
#[derive(Debug)]
struct PendingCue {
    index: i64,
    // @field: Line of the index, reported if the block is never completed
    index_line: usize,
    index_content: String,
    start: Timecode,
    end: Timecode,
    text: String,
}

impl PendingCue {
    fn new(index: i64, index_line: usize, index_content: &str) -> Self {
        PendingCue {
            index,
            index_line,
            index_content: index_content.to_string(),
            start: Timecode::default(),
            end: Timecode::default(),
            text: String::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    fn into_cue(self) -> Cue {
        Cue::new(self.index, self.start, self.end, self.text)
    }
}

/// SRT state machine. All state lives inside a single `parse` call, so one
/// parser value can be reused for any number of documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct SrtParser;

impl SrtParser {
    pub fn new() -> Self {
        SrtParser
    }

    /// Parse a complete SRT document into its cues, in input order
    pub fn parse(&self, content: &str) -> Result<Vec<Cue>, ParseError> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        let mut cues = Vec::new();
        let mut state = ParserState::AwaitingIndex;
        let mut pending: Option<PendingCue> = None;

        for (offset, raw_line) in content.lines().enumerate() {
            let line_number = offset + 1;
            let line = raw_line.trim_end();

            state = match state {
                ParserState::AwaitingIndex => {
                    if line.is_empty() {
                        continue;
                    }
                    let index = parse_index_line(line, line_number)?;
                    pending = Some(PendingCue::new(index, line_number, line));
                    ParserState::AwaitingTimecode
                }
                ParserState::AwaitingTimecode => {
                    let (start, end) = parse_timecode_line(line, line_number)?;
                    if let Some(cue) = pending.as_mut() {
                        cue.start = start;
                        cue.end = end;
                    }
                    ParserState::AccumulatingText
                }
                ParserState::AccumulatingText => {
                    if line.is_empty() {
                        if let Some(cue) = pending.take() {
                            finish_cue(cue, &mut cues);
                        }
                        ParserState::AwaitingIndex
                    } else {
                        if let Some(cue) = pending.as_mut() {
                            cue.push_line(line);
                        }
                        ParserState::AccumulatingText
                    }
                }
            };
        }

        match (state, pending) {
            (ParserState::AwaitingTimecode, Some(cue)) => {
                return Err(ParseError::new(
                    ParseErrorKind::IncompleteBlock,
                    cue.index_line,
                    cue.index_content,
                ));
            }
            (ParserState::AccumulatingText, Some(cue)) => finish_cue(cue, &mut cues),
            _ => {}
        }

        debug!("Parsed {} SRT cues", cues.len());
        Ok(cues)
    }
}

/// Parse a complete SRT document with a fresh parser
pub fn parse(content: &str) -> Result<Vec<Cue>, ParseError> {
    SrtParser::new().parse(content)
}

fn finish_cue(cue: PendingCue, cues: &mut Vec<Cue>) {
    if cue.text.is_empty() {
        warn!(
            "Skipping cue {} at line {}: no caption text",
            cue.index, cue.index_line
        );
        return;
    }
    cues.push(cue.into_cue());
}

fn parse_index_line(line: &str, line_number: usize) -> Result<i64, ParseError> {
    line.parse::<i64>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidIndexLine, line_number, line))
}

fn parse_timecode_line(line: &str, line_number: usize) -> Result<(Timecode, Timecode), ParseError> {
    let fail = |kind| ParseError::new(kind, line_number, line);

    let (start, end) = match line.split(TIMECODE_ARROW).collect::<Vec<_>>()[..] {
        [start, end] => (start, end),
        _ => return Err(fail(ParseErrorKind::MissingTimecodeArrow)),
    };

    if !has_timecode_shape(start) || !has_timecode_shape(end) {
        return Err(fail(ParseErrorKind::InvalidTimecodeFormat));
    }

    let start = parse_timecode(start).map_err(|e| fail(ParseErrorKind::TimecodeFieldParseError(e)))?;
    let end = parse_timecode(end).map_err(|e| fail(ParseErrorKind::TimecodeFieldParseError(e)))?;

    Ok((start, end))
}
