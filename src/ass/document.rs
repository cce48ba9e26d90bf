use std::fmt::Write;

use super::events::DialogueEvent;

// @module: ASS document assembly

const SCRIPT_INFO_HEADER: &str = "[Script Info]
; Script generated by srt2ass
ScriptType: v4.00+
PlayResX: 1280
PlayResY: 720
";

const EVENTS_HEADER: &str = "[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
";

/// Render a complete ASS document.
///
/// `styles` is the sanitized style text; it is trimmed before being placed
/// between the fixed script header and the events section.
pub fn render_document(styles: &str, events: &[DialogueEvent]) -> String {
    let mut document = String::with_capacity(
        SCRIPT_INFO_HEADER.len() + styles.len() + EVENTS_HEADER.len() + events.len() * 64,
    );

    document.push_str(SCRIPT_INFO_HEADER);
    document.push('\n');
    document.push_str(styles.trim());
    document.push_str("\n\n");
    document.push_str(EVENTS_HEADER);

    for event in events {
        // Writing into a String cannot fail
        let _ = writeln!(document, "{}", event);
    }

    document
}
