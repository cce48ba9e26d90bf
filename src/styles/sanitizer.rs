// @module: Style sheet cleanup before embedding it in the output header

const SCRIPT_INFO_MARKER: &str = "[Script Info]";
const STYLES_MARKER: &str = "[V4+ Styles]";

/// Where the scan currently is in the pasted style sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any recognized section, lines are kept
    Loose,
    /// Inside a pasted `[Script Info]` section, lines are dropped
    SkipScriptInfo,
    /// Inside `[V4+ Styles]`, lines are kept
    Styles,
}

/// Remove any `[Script Info]` section from a style sheet.
///
/// Section markers other than `[Script Info]` end the skipped section and are
/// kept along with everything after them. The result is not trimmed.
pub fn sanitize(style_sheet: &str) -> String {
    let mut state = ScanState::Loose;
    let mut kept: Vec<&str> = Vec::new();

    for line in style_sheet.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with(SCRIPT_INFO_MARKER) {
            state = ScanState::SkipScriptInfo;
        } else if trimmed.starts_with(STYLES_MARKER) {
            state = ScanState::Styles;
            kept.push(line);
        } else if trimmed.starts_with('[') {
            state = ScanState::Loose;
            kept.push(line);
        } else if state != ScanState::SkipScriptInfo {
            kept.push(line);
        }
    }

    kept.join("\n")
}
