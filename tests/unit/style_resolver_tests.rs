/*!
 * Tests for primary/secondary style resolution
 */

use srt2ass::styles::{ResolvedStyles, StyleCatalog, DEFAULT_STYLE_SHEET};
use crate::common;

#[test]
fn test_resolve_withDefaultAndSecondary_shouldUseBoth() {
    let catalog = StyleCatalog::parse(DEFAULT_STYLE_SHEET);
    let resolved = ResolvedStyles::resolve(&catalog, true);

    assert_eq!(resolved.primary_name, "Default");
    assert_eq!(resolved.secondary_name, "Secondary");
    assert_eq!(resolved.primary_margin_v, 40);
    assert_eq!(resolved.secondary_margin_v, 10);
}

#[test]
fn test_resolve_withEmptyCatalogBilingual_shouldFallBackToDefault() {
    let resolved = ResolvedStyles::resolve(&StyleCatalog::default(), true);

    assert_eq!(resolved.primary_name, "Default");
    assert_eq!(resolved.secondary_name, "Default");
    assert_eq!(resolved.primary_margin_v, 40);
    assert_eq!(resolved.secondary_margin_v, 10);
}

#[test]
fn test_resolve_withEmptyCatalogMono_shouldUseSmallPrimaryMargin() {
    let resolved = ResolvedStyles::resolve(&StyleCatalog::default(), false);

    assert_eq!(resolved.primary_margin_v, 10);
    assert_eq!(resolved.secondary_margin_v, 10);
}

#[test]
fn test_resolve_withSingleStyle_shouldShareIt() {
    let catalog = StyleCatalog::parse("Style: Foo,Arial,20\n");

    for bilingual in [true, false] {
        let resolved = ResolvedStyles::resolve(&catalog, bilingual);
        assert_eq!(resolved.primary_name, "Foo");
        assert_eq!(resolved.secondary_name, "Foo");
    }
}

#[test]
fn test_resolve_withUnknownNames_shouldUseDeclarationOrder() {
    let catalog = StyleCatalog::parse(&common::style_section(&[("Top", "60"), ("Bottom", "15"), ("Extra", "0")]));
    let resolved = ResolvedStyles::resolve(&catalog, true);

    assert_eq!(resolved.primary_name, "Top");
    assert_eq!(resolved.secondary_name, "Bottom");
    assert_eq!(resolved.primary_margin_v, 60);
    assert_eq!(resolved.secondary_margin_v, 15);
}

#[test]
fn test_resolve_withWellKnownNamesAnywhere_shouldPreferThem() {
    let catalog = StyleCatalog::parse(&common::style_section(&[("Foo", "1"), ("Secondary", "2"), ("Default", "3")]));
    let resolved = ResolvedStyles::resolve(&catalog, true);

    assert_eq!(resolved.primary_name, "Default");
    assert_eq!(resolved.secondary_name, "Secondary");
    assert_eq!(resolved.primary_margin_v, 3);
    assert_eq!(resolved.secondary_margin_v, 2);
}

#[test]
fn test_resolve_withSingleStyleMargin_shouldLookUpResolvedName() {
    let catalog = StyleCatalog::parse(&common::style_line("Solo", "33"));
    let resolved = ResolvedStyles::resolve(&catalog, true);

    assert_eq!(resolved.primary_margin_v, 33);
    assert_eq!(resolved.secondary_margin_v, 33);
}

#[test]
fn test_resolve_withUnparsableMargins_shouldUseDefaults() {
    let catalog = StyleCatalog::parse(&common::style_section(&[("Default", "x"), ("Secondary", "")]));

    let bilingual = ResolvedStyles::resolve(&catalog, true);
    assert_eq!(bilingual.primary_margin_v, 40);
    assert_eq!(bilingual.secondary_margin_v, 10);

    let mono = ResolvedStyles::resolve(&catalog, false);
    assert_eq!(mono.primary_margin_v, 10);
}
