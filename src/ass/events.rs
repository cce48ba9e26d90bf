use std::fmt;
use log::debug;

use crate::converter::ConversionOptions;
use crate::errors::ConversionError;
use crate::styles::ResolvedStyles;
use crate::subtitle_processor::Cue;

// @module: Dialogue event construction

const ASS_LINE_BREAK: &str = "\\N";

/// One `Dialogue:` record of the `[Events]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEvent {
    /// ASS start timestamp
    pub start: String,

    /// ASS end timestamp
    pub end: String,

    pub style_name: String,

    pub margin_v: i32,

    /// Text with newlines already turned into `\N`
    pub text: String,
}

impl DialogueEvent {
    fn new(start: &str, end: &str, style_name: &str, margin_v: i32, text: &str) -> Self {
        DialogueEvent {
            start: start.to_string(),
            end: end.to_string(),
            style_name: style_name.to_string(),
            margin_v,
            text: text.replace('\n', ASS_LINE_BREAK),
        }
    }
}

impl fmt::Display for DialogueEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dialogue: 0,{},{},{},,0,0,{},,{}",
            self.start, self.end, self.style_name, self.margin_v, self.text
        )
    }
}

/// Build the dialogue events of every cue, in cue order
pub fn build_events(
    cues: &[Cue],
    styles: &ResolvedStyles,
    options: &ConversionOptions,
) -> Result<Vec<DialogueEvent>, ConversionError> {
    let mut events = Vec::with_capacity(cues.len() * 2);

    for cue in cues {
        events.extend(build_cue_events(cue, styles, options)?);
    }

    debug!("Built {} dialogue events from {} cues", events.len(), cues.len());
    Ok(events)
}

/// Build the zero, one or two events of a single cue.
///
/// In bilingual mode the English line always comes first under the secondary
/// style; `cn_first` only decides which source line is the Chinese one.
pub fn build_cue_events(
    cue: &Cue,
    styles: &ResolvedStyles,
    options: &ConversionOptions,
) -> Result<Vec<DialogueEvent>, ConversionError> {
    let start = cue.ass_start()?;
    let end = cue.ass_end()?;
    let mut events = Vec::with_capacity(2);

    if options.bilingual && cue.text_lines.len() >= 2 {
        let first = cue.text_lines[0].trim();
        let second = cue.text_lines[1].trim();
        let (cn_text, en_text) = if options.cn_first { (first, second) } else { (second, first) };

        if !en_text.is_empty() {
            events.push(DialogueEvent::new(&start, &end, &styles.secondary_name, styles.secondary_margin_v, en_text));
        }
        if !cn_text.is_empty() {
            events.push(DialogueEvent::new(&start, &end, &styles.primary_name, styles.primary_margin_v, cn_text));
        }
    } else {
        let combined = cue.text_lines.join(" ");
        let combined = combined.trim();

        if !combined.is_empty() {
            events.push(DialogueEvent::new(&start, &end, &styles.primary_name, styles.primary_margin_v, combined));
        }
    }

    Ok(events)
}
