/*!
 * Style sheet handling.
 *
 * - `catalog`: declared style names and their fields
 * - `resolver`: which styles and margins the language tracks use
 * - `sanitizer`: strips a pasted `[Script Info]` section from the style text
 */

pub use self::catalog::StyleCatalog;
pub use self::resolver::ResolvedStyles;
pub use self::sanitizer::sanitize;

pub mod catalog;
pub mod resolver;
pub mod sanitizer;

/// Style sheet used when no style source is configured
pub const DEFAULT_STYLE_SHEET: &str = "[Script Info]
; Script generated by srt2ass
ScriptType: v4.00+
PlayResX: 1280
PlayResY: 720

[V4+ Styles]
Format: Name,Fontname,Fontsize,PrimaryColour,SecondaryColour,OutlineColour,BackColour,Bold,Italic,Underline,StrikeOut,ScaleX,ScaleY,Spacing,Angle,BorderStyle,Outline,Shadow,Alignment,MarginL,MarginR,MarginV,Encoding
Style: Default,微软雅黑,42,&H00729ccc,&H000000FF,&H00000000,&H00000000,-1,0,0,0,100,100,3.2,0,1,1.8,0,2,10,10,40,1
Style: Secondary,微软雅黑,28,&H00ffffff,&H000000FF,&H00000000,&H00000000,-1,0,0,0,100,100,0.8,0,1,2.0,0,2,10,10,10,1
";

/// Style sheet substituted when the configured style text is empty
pub const FALLBACK_STYLE_SHEET: &str = "[Script Info]
; Script generated by srt2ass
ScriptType: v4.00+
PlayResX: 1280
PlayResY: 720

[V4+ Styles]
Format: Name,Fontname,Fontsize,PrimaryColour,SecondaryColour,OutlineColour,BackColour,Bold,Italic,Underline,StrikeOut,ScaleX,ScaleY,Spacing,Angle,BorderStyle,Outline,Shadow,Alignment,MarginL,MarginR,MarginV,Encoding
Style: Default,Arial,36,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,-1,0,0,0,100,100,0,0,1,2,2,2,10,10,40,1
Style: Secondary,Arial,24,&H00CCCCCC,&H000000FF,&H00000000,&H00000000,-1,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1
";

/// Everything derived from the style text that a conversion needs.
///
/// The same style text is usually shared by a whole batch, so this is built
/// once and reused for every file.
#[derive(Debug, Clone)]
pub struct PreparedStyles {
    /// Styles and margins for the dialogue lines
    pub resolved: ResolvedStyles,

    /// Style text to embed in the output header
    pub sanitized: String,
}

impl PreparedStyles {
    pub fn new(style_sheet: &str, bilingual: bool) -> Self {
        let catalog = StyleCatalog::parse(style_sheet);
        if catalog.is_empty() {
            log::warn!("No Style: declarations found, dialogue will reference the 'Default' style");
        }

        PreparedStyles {
            resolved: ResolvedStyles::resolve(&catalog, bilingual),
            sanitized: sanitize(style_sheet),
        }
    }
}
