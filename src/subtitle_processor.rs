use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use regex::Regex;
use once_cell::sync::Lazy;
use log::{debug, trace};

use crate::errors::ConversionError;
use crate::timestamp;

// @module: SRT cue parsing

// @const: Bare sequence number line
static SEQUENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+$").expect("sequence number regex is valid")
});

const TIMING_SEPARATOR: &str = " --> ";
const TIMING_MARKER: &str = "-->";
const BYTE_ORDER_MARK: char = '\u{feff}';

// @struct: Single SRT cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Start timestamp as written in the SRT file
    pub start_time: String,

    // @field: End timestamp as written in the SRT file
    pub end_time: String,

    // @field: Raw text lines, never empty
    pub text_lines: Vec<String>,
}

impl Cue {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>, text_lines: Vec<String>) -> Self {
        Cue {
            start_time: start_time.into(),
            end_time: end_time.into(),
            text_lines,
        }
    }

    /// Start time in ASS notation
    pub fn ass_start(&self) -> Result<String, ConversionError> {
        timestamp::srt_to_ass(&self.start_time)
    }

    /// End time in ASS notation
    pub fn ass_end(&self) -> Result<String, ConversionError> {
        timestamp::srt_to_ass(&self.end_time)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}{}{}", self.start_time, TIMING_SEPARATOR, self.end_time)?;
        for line in &self.text_lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Cues read from one SRT file
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Parsed cues in file order
    pub cues: Vec<Cue>,
}

impl SubtitleCollection {
    /// Read and parse an SRT file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConversionError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let cues = Self::parse_cues(&content)?;
        debug!("Parsed {} cues from {:?}", cues.len(), path);

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            cues,
        })
    }

    /// Parse SRT content into cues.
    ///
    /// A bare number line opens a cue and must be followed by a timing line.
    /// Text is collected until a blank line, another bare number or a line
    /// containing `-->`. Cues without text are dropped.
    pub fn parse_cues(content: &str) -> Result<Vec<Cue>, ConversionError> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        let lines: Vec<&str> = content.trim().lines().collect();

        let mut cues = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let sequence = lines[i];
            if !SEQUENCE_REGEX.is_match(sequence) {
                i += 1;
                continue;
            }

            let timing_line = lines.get(i + 1).ok_or_else(|| {
                ConversionError::MalformedTimestamp(format!("cue {} has no timing line", sequence))
            })?;
            let (start_time, end_time) = Self::parse_timing_line(timing_line).map_err(|e| {
                ConversionError::MalformedTimestamp(format!("cue {}: {}", sequence, e))
            })?;

            let mut j = i + 2;
            let mut text_lines = Vec::new();
            while j < lines.len() && Self::is_cue_text(lines[j]) {
                text_lines.push(lines[j].to_string());
                j += 1;
            }

            if text_lines.is_empty() {
                debug!("Dropping cue {} without text", sequence);
            } else {
                let cue = Cue::new(start_time, end_time, text_lines);
                trace!("Cue {}:\n{}", sequence, cue);
                cues.push(cue);
            }

            i = j;
        }

        Ok(cues)
    }

    /// Split `<start> --> <end>` and check both timestamps convert
    fn parse_timing_line(line: &str) -> Result<(String, String), String> {
        let parts: Vec<&str> = line.split(TIMING_SEPARATOR).collect();
        let [start, end] = parts.as_slice() else {
            return Err(format!("invalid timing line '{}'", line));
        };

        for time in [start, end] {
            timestamp::srt_to_ass(time).map_err(|e| match e {
                ConversionError::MalformedTimestamp(detail) => detail,
                other => other.to_string(),
            })?;
        }

        Ok((start.trim().to_string(), end.trim().to_string()))
    }

    fn is_cue_text(line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && !SEQUENCE_REGEX.is_match(trimmed) && !line.contains(TIMING_MARKER)
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
