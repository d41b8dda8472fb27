use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::errors::{ParseError, SrtError};
use crate::parser;
use crate::timecode::Timecode;

// @module: Parsed subtitle entries and input adapters

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Index as declared in the file, never renumbered
    pub index: i64,

    // @field: Start time
    pub start: Timecode,

    // @field: End time
    pub end: Timecode,

    // @field: Caption lines joined by '\n'
    pub text: String,
}

impl Cue {
    pub fn new(index: i64, start: Timecode, end: Timecode, text: String) -> Self {
        Cue {
            index,
            start,
            end,
            text,
        }
    }

    /// Number of caption lines
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Cues parsed from one document, with the file they came from if any
#[derive(Debug, Clone, Default)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: Option<PathBuf>,

    /// Cues in input order
    pub entries: Vec<Cue>,
}

impl SubtitleCollection {
    /// Parse SRT content already held in memory
    pub fn parse_srt_string(content: &str) -> Result<Self, ParseError> {
        Ok(SubtitleCollection {
            source_file: None,
            entries: parser::parse(content)?,
        })
    }

    /// Read a whole byte stream as UTF-8 and parse it.
    /// Read and decode failures are returned unchanged as `SrtError::Io`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SrtError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::parse_srt_string(&content)?)
    }

    /// Read and parse an SRT file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SrtError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut collection = Self::from_reader(BufReader::new(file))?;
        debug!("Loaded {} cues from {}", collection.len(), path.display());
        collection.source_file = Some(path.to_path_buf());
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest start and latest end over all cues
    pub fn span(&self) -> Option<TimeSpan> {
        let start = self.entries.iter().map(|cue| cue.start).min()?;
        let end = self.entries.iter().map(|cue| cue.end).max()?;
        Some(TimeSpan { start, end })
    }
}

/// Time range covered by a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    #[serde(serialize_with = "serialize_timecode")]
    pub start: Timecode,
    #[serde(serialize_with = "serialize_timecode")]
    pub end: Timecode,
}

fn serialize_timecode<S: serde::Serializer>(timecode: &Timecode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(timecode)
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        match &self.source_file {
            Some(path) => writeln!(f, "Source: {:?}", path)?,
            None => writeln!(f, "Source: <memory>")?,
        }
        writeln!(f, "Entries: {}", self.entries.len())?;
        if let Some(span) = self.span() {
            writeln!(f, "Span: {}", span)?;
        }
        Ok(())
    }
}
