use std::path::{Path, PathBuf};
use log::debug;

use crate::ass::{build_events, render_document};
use crate::errors::ConversionError;
use crate::file_utils::FileManager;
use crate::styles::PreparedStyles;
use crate::subtitle_processor::SubtitleCollection;

// @module: SRT to ASS conversion entry points

/// Switches that control how cue text becomes dialogue events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Split the first two lines of each cue into two styled events
    pub bilingual: bool,

    /// The first text line of a cue is the Chinese one
    pub cn_first: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            bilingual: true,
            cn_first: true,
        }
    }
}

/// Convert one SRT file to an ASS file using the given style text
pub fn convert<P1: AsRef<Path>, P2: AsRef<Path>>(
    srt_path: P1,
    output_path: P2,
    style_sheet: &str,
    options: ConversionOptions,
) -> Result<PathBuf, ConversionError> {
    let styles = PreparedStyles::new(style_sheet, options.bilingual);
    convert_with_styles(srt_path, output_path, &styles, options)
}

/// Convert one SRT file with styles prepared ahead of time.
///
/// The file is read fully and converted in memory before anything is written.
/// The output replaces the target atomically, so a failure at any step leaves
/// no partial output behind it.
pub fn convert_with_styles<P1: AsRef<Path>, P2: AsRef<Path>>(
    srt_path: P1,
    output_path: P2,
    styles: &PreparedStyles,
    options: ConversionOptions,
) -> Result<PathBuf, ConversionError> {
    let srt_path = srt_path.as_ref();
    let output_path = output_path.as_ref();

    let collection = SubtitleCollection::from_file(srt_path)?;
    let events = build_events(&collection.cues, &styles.resolved, &options)?;
    let document = render_document(&styles.sanitized, &events);

    FileManager::write_with_bom(output_path, &document).map_err(|source| ConversionError::FileWrite {
        path: output_path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} dialogue events to {:?}", events.len(), output_path);
    Ok(output_path.to_path_buf())
}

/// Convert SRT content held in memory, returning the ASS document without a BOM
pub fn convert_string(
    srt_content: &str,
    styles: &PreparedStyles,
    options: ConversionOptions,
) -> Result<String, ConversionError> {
    let cues = SubtitleCollection::parse_cues(srt_content)?;
    let events = build_events(&cues, &styles.resolved, &options)?;
    Ok(render_document(&styles.sanitized, &events))
}
