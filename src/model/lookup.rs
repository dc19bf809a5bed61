// src/model/lookup.rs

use super::catalog::{CatalogError, ElementCatalog};
use super::element::Element;

/// Resolves a raw user query to an element.
///
/// The query is trimmed, then matched case-insensitively against symbols
/// first and full names second, so "fe", "FE" and "iron" all resolve to
/// Iron. Linear scan; the catalog holds 118 entries.
pub fn lookup(catalog: &ElementCatalog, query: &str) -> Result<&'static Element, CatalogError> {
    let needle = query.trim();
    if needle.is_empty() {
        return Err(CatalogError::NotFound(query.to_string()));
    }

    if let Some(e) = catalog.iter().find(|e| e.symbol.eq_ignore_ascii_case(needle)) {
        return Ok(e);
    }

    catalog
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(needle))
        .ok_or_else(|| CatalogError::NotFound(needle.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_resolves_to_itself() {
        let catalog = ElementCatalog::new();
        for e in catalog.iter() {
            let found = lookup(&catalog, e.symbol).unwrap();
            assert_eq!(found.symbol, e.symbol);
        }
    }

    #[test]
    fn test_every_name_resolves_regardless_of_casing() {
        let catalog = ElementCatalog::new();
        for e in catalog.iter() {
            let lower = e.name.to_lowercase();
            let upper = e.name.to_uppercase();
            assert_eq!(lookup(&catalog, &lower).unwrap().symbol, e.symbol);
            assert_eq!(lookup(&catalog, &upper).unwrap().symbol, e.symbol);
        }
    }

    #[test]
    fn test_iron_by_name() {
        let catalog = ElementCatalog::new();
        let fe = lookup(&catalog, "iron").unwrap();
        assert_eq!(fe.symbol, "Fe");
        assert_eq!(fe.atomic_number, 26);
    }

    #[test]
    fn test_symbol_match_is_case_insensitive() {
        let catalog = ElementCatalog::new();
        assert_eq!(lookup(&catalog, "FE").unwrap().symbol, "Fe");
        assert_eq!(lookup(&catalog, "fe").unwrap().symbol, "Fe");
    }

    #[test]
    fn test_query_is_trimmed() {
        let catalog = ElementCatalog::new();
        assert_eq!(lookup(&catalog, "  Na  ").unwrap().symbol, "Na");
        assert_eq!(lookup(&catalog, "\thelium\n").unwrap().symbol, "He");
    }

    #[test]
    fn test_unknown_query_is_not_found() {
        let catalog = ElementCatalog::new();
        assert!(matches!(
            lookup(&catalog, "Xx"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_blank_query_is_not_found() {
        let catalog = ElementCatalog::new();
        assert!(lookup(&catalog, "").is_err());
        assert!(lookup(&catalog, "   ").is_err());
    }

    #[test]
    fn test_symbol_wins_over_name_prefix() {
        // "He" is both Helium's symbol and a prefix of several names; the
        // symbol path must win and prefixes must not match at all.
        let catalog = ElementCatalog::new();
        assert_eq!(lookup(&catalog, "He").unwrap().name, "Helium");
        assert!(lookup(&catalog, "Heli").is_err());
    }
}
