use log::debug;

use super::catalog::StyleCatalog;

// @module: Style role assignment for the two language tracks

const PRIMARY_STYLE: &str = "Default";
const SECONDARY_STYLE: &str = "Secondary";

const BILINGUAL_PRIMARY_MARGIN_V: i32 = 40;
const DEFAULT_MARGIN_V: i32 = 10;

/// Styles and vertical margins assigned to the dialogue lines of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyles {
    /// Style of the Chinese or single-language line
    pub primary_name: String,

    /// Style of the English line in bilingual mode
    pub secondary_name: String,

    pub primary_margin_v: i32,

    pub secondary_margin_v: i32,
}

impl ResolvedStyles {
    /// Pick the primary and secondary styles from a catalog.
    ///
    /// Names are settled first; the margins are then looked up under the
    /// names actually chosen, falling back to fixed defaults.
    pub fn resolve(catalog: &StyleCatalog, bilingual: bool) -> Self {
        let names = catalog.names();

        let primary_name = if catalog.contains(PRIMARY_STYLE) {
            PRIMARY_STYLE.to_string()
        } else {
            names.first().cloned().unwrap_or_else(|| PRIMARY_STYLE.to_string())
        };

        let secondary_name = if catalog.contains(SECONDARY_STYLE) {
            SECONDARY_STYLE.to_string()
        } else if let Some(second) = names.get(1) {
            second.clone()
        } else {
            primary_name.clone()
        };

        let primary_margin_v = catalog.margin_v(&primary_name).unwrap_or(if bilingual {
            BILINGUAL_PRIMARY_MARGIN_V
        } else {
            DEFAULT_MARGIN_V
        });
        let secondary_margin_v = catalog.margin_v(&secondary_name).unwrap_or(DEFAULT_MARGIN_V);

        debug!(
            "Resolved styles: primary '{}' (MarginV {}), secondary '{}' (MarginV {})",
            primary_name, primary_margin_v, secondary_name, secondary_margin_v
        );

        ResolvedStyles {
            primary_name,
            secondary_name,
            primary_margin_v,
            secondary_margin_v,
        }
    }
}
