/*!
 * Tests for style sheet sanitization
 */

use srt2ass::styles::{sanitize, DEFAULT_STYLE_SHEET, FALLBACK_STYLE_SHEET};

#[test]
fn test_sanitize_withPastedHeader_shouldDropScriptInfo() {
    let cleaned = sanitize(DEFAULT_STYLE_SHEET);

    assert!(!cleaned.contains("[Script Info]"));
    assert!(!cleaned.contains("PlayResX"));
    assert!(!cleaned.contains("ScriptType"));
    assert!(cleaned.starts_with("[V4+ Styles]\nFormat: Name,"));
    assert!(cleaned.contains("Style: Default,"));
    assert!(cleaned.contains("Style: Secondary,"));
}

#[test]
fn test_sanitize_withBareStyleLines_shouldKeepEverything() {
    let sheet = "Format: Name,Fontname\nStyle: A,Arial\nStyle: B,Arial";

    assert_eq!(sanitize(sheet), sheet);
}

#[test]
fn test_sanitize_withOtherSection_shouldEndSkipping() {
    let sheet = "[Script Info]\nTitle: pasted\n[Fonts]\nfontdata\n[Script Info]\nPlayResY: 720";

    assert_eq!(sanitize(sheet), "[Fonts]\nfontdata");
}

#[test]
fn test_sanitize_withStylesAfterScriptInfo_shouldKeepStyleSection() {
    let sheet = "  [Script Info]  \nScriptType: v4.00+\n\n[V4+ Styles]\nStyle: A,Arial\n\n; trailing comment";

    assert_eq!(sanitize(sheet), "[V4+ Styles]\nStyle: A,Arial\n\n; trailing comment");
}

#[test]
fn test_sanitize_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(sanitize(""), "");
}

#[test]
fn test_sanitize_appliedTwice_shouldMatchSingleApplication() {
    let inputs = [
        DEFAULT_STYLE_SHEET,
        FALLBACK_STYLE_SHEET,
        "[Script Info]\nTitle: x\n[Fonts]\nf\n[Script Info]\ny",
        "loose line\n[V4+ Styles]\nStyle: A\n[Events]\nDialogue: 0",
        "",
    ];

    for input in inputs {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "sanitize is not idempotent for {:?}", input);
    }
}
