/*!
 * Tests for cue records and the reader/file adapters
 */

use anyhow::Result;
use std::io::{self, Cursor, Read};
use subrip::errors::{ParseErrorKind, SrtError};
use subrip::subtitle_processor::{Cue, SubtitleCollection};
use crate::common::{self, tc, TWO_CUES};

/// Reader that always fails, to check I/O errors pass through unchanged
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream dropped"))
    }
}

#[test]
fn test_cue_properties_withValidEntry_shouldHaveCorrectValues() {
    let cue = Cue::new(42, tc(0, 1, 1, 234), tc(0, 1, 5, 432), "Hello\nWorld".to_string());

    assert_eq!(cue.index, 42);
    assert_eq!(cue.start.to_string(), "00:01:01,234");
    assert_eq!(cue.end.to_string(), "00:01:05,432");
    assert_eq!(cue.text, "Hello\nWorld");
    assert_eq!(cue.line_count(), 2);
}

#[test]
fn test_parseSrtString_withValidContent_shouldHaveNoSource() -> Result<()> {
    let collection = SubtitleCollection::parse_srt_string(TWO_CUES)?;

    assert_eq!(collection.len(), 2);
    assert!(collection.source_file.is_none());
    Ok(())
}

#[test]
fn test_fromReader_withValidContent_shouldParse() -> Result<()> {
    let collection = SubtitleCollection::from_reader(Cursor::new(TWO_CUES.as_bytes()))?;

    assert_eq!(collection.entries[1].text, "Goodbye, World!");
    Ok(())
}

#[test]
fn test_fromReader_withFailingReader_shouldPropagateIoError() {
    match SubtitleCollection::from_reader(FailingReader) {
        Err(SrtError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_fromReader_withInvalidUtf8_shouldReturnIoError() {
    let bytes: &[u8] = &[b'1', b'\n', 0xff, 0xfe];
    match SubtitleCollection::from_reader(bytes) {
        Err(SrtError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_fromReader_withMalformedContent_shouldReturnParseError() {
    let err = SubtitleCollection::from_reader("oops\n".as_bytes()).unwrap_err();
    let parse_error = err.as_parse_error().expect("parse error");

    assert_eq!(parse_error.kind, ParseErrorKind::InvalidIndexLine);
    assert_eq!(parse_error.line, 1);
}

#[test]
fn test_fromFile_withValidFile_shouldRecordSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;

    let collection = SubtitleCollection::from_file(&path)?;

    assert_eq!(collection.source_file.as_deref(), Some(path.as_path()));
    assert_eq!(collection.len(), 2);
    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldReturnNotFound() {
    match SubtitleCollection::from_file("definitely/not/here.srt") {
        Err(SrtError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_span_withUnorderedCues_shouldCoverAll() -> Result<()> {
    let input = "1\n00:00:05,000 --> 00:00:06,000\nA\n\n2\n00:00:01,000 --> 00:00:09,500\nB\n";
    let span = SubtitleCollection::parse_srt_string(input)?.span().expect("span");

    assert_eq!(span.start, tc(0, 0, 1, 0));
    assert_eq!(span.end, tc(0, 0, 9, 500));
    assert_eq!(span.to_string(), "00:00:01,000 → 00:00:09,500");
    Ok(())
}

#[test]
fn test_span_withNoCues_shouldBeNone() {
    assert!(SubtitleCollection::default().span().is_none());
}

#[test]
fn test_collectionDisplay_shouldSummarize() -> Result<()> {
    let display = SubtitleCollection::parse_srt_string(TWO_CUES)?.to_string();

    assert!(display.contains("Entries: 2"));
    assert!(display.contains("Source: <memory>"));
    assert!(display.contains("00:00:01,000 → 00:00:04,000"));
    Ok(())
}
