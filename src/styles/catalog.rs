use std::collections::HashMap;

// @module: Style declarations found in a raw style sheet

/// Index of the field holding `MarginV` in a V4+ `Style:` line
const MARGIN_V_FIELD_INDEX: usize = 21;

const STYLE_PREFIX: &str = "Style:";

/// Ordered list of the styles declared in a style sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCatalog {
    // @field: Style names in declaration order
    names: Vec<String>,

    // @field: Raw comma-separated fields per style, first declaration wins
    fields: HashMap<String, Vec<String>>,
}

impl StyleCatalog {
    /// Scan a style sheet for `Style:` lines.
    ///
    /// Every declaration contributes its name to the ordered list. Only lines
    /// spelled exactly `Style: <name>,` are indexed for field lookups.
    pub fn parse(style_sheet: &str) -> Self {
        let mut catalog = StyleCatalog::default();

        for line in style_sheet.lines() {
            let trimmed = line.trim();
            if !trimmed.starts_with(STYLE_PREFIX) {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            let name = parts[0].replace(STYLE_PREFIX, "").trim().to_string();

            if trimmed.starts_with(&format!("{} {},", STYLE_PREFIX, name)) {
                catalog.fields
                    .entry(name.clone())
                    .or_insert_with(|| parts.iter().map(|part| part.to_string()).collect());
            }

            catalog.names.push(name);
        }

        catalog
    }

    /// Declared style names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether a style with this exact name was declared
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|declared| declared == name)
    }

    /// Raw field list of a style declaration
    pub fn fields(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(|fields| fields.as_slice())
    }

    /// Declared `MarginV` of a style.
    ///
    /// Returns `None` when the style is unknown, the declaration is too short
    /// or the field is not an integer.
    pub fn margin_v(&self, name: &str) -> Option<i32> {
        self.fields(name)?
            .get(MARGIN_V_FIELD_INDEX)?
            .trim()
            .parse()
            .ok()
    }
}
