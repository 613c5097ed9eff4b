//! # Filter/Search Engine
//!
//! Pure functions producing the renter's visible subset of the catalog.
//! Recomputation is a full rescan and is expected to be cheap; an empty
//! result is a valid, displayable state.

use std::fmt;

use crate::models::{Property, PropertyType};

/// The property-type facet next to the search box: `All` or one exact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFacet {
    All,
    Only(PropertyType),
}

impl TypeFacet {
    /// Parses the facet query parameter. Anything that is not a known
    /// property type (including the literal `All` and a missing value)
    /// falls back to `All`.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<PropertyType>().map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for TypeFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(t) => t.fmt(f),
        }
    }
}

/// Returns the listings whose title or area contains `query`
/// (case-insensitive) and whose type matches the facet.
pub fn filter_catalog<'a>(
    properties: &'a [Property],
    query: &str,
    facet: TypeFacet,
) -> Vec<&'a Property> {
    let needle = query.to_lowercase();
    properties
        .iter()
        .filter(|p| {
            let matches_search = p.title.to_lowercase().contains(&needle)
                || p.area.to_lowercase().contains(&needle);
            let matches_type = match facet {
                TypeFacet::All => true,
                TypeFacet::Only(t) => p.property_type == t,
            };
            matches_search && matches_type
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_catalog;

    #[test]
    fn empty_query_with_all_facet_returns_everything() {
        let catalog = seed_catalog();
        let out = filter_catalog(&catalog, "", TypeFacet::All);
        assert_eq!(out.len(), catalog.len());
    }

    #[test]
    fn query_matches_area_case_insensitively() {
        let catalog = seed_catalog();
        let out = filter_catalog(&catalog, "bandra", TypeFacet::All);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p1");
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let catalog = seed_catalog();
        let out = filter_catalog(&catalog, "SCANDINAVIAN", TypeFacet::All);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p2");
    }

    #[test]
    fn unmatched_query_yields_empty_result() {
        let catalog = seed_catalog();
        // p3's title contains "Villa", so use a string absent from every
        // title and area.
        let out = filter_catalog(&catalog, "lighthouse", TypeFacet::All);
        assert!(out.is_empty());
    }

    #[test]
    fn facet_restricts_to_exact_type() {
        let catalog = seed_catalog();
        let out = filter_catalog(&catalog, "", TypeFacet::Only(PropertyType::Villa));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].property_type, PropertyType::Villa);
    }

    #[test]
    fn result_is_subset_and_every_hit_contains_the_query() {
        let catalog = seed_catalog();
        let query = "i";
        let out = filter_catalog(&catalog, query, TypeFacet::All);
        for hit in &out {
            assert!(catalog.iter().any(|p| p.id == hit.id));
            assert!(
                hit.title.to_lowercase().contains(query)
                    || hit.area.to_lowercase().contains(query)
            );
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = seed_catalog();
        let once: Vec<Property> = filter_catalog(&catalog, "", TypeFacet::Only(PropertyType::Studio))
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_catalog(&once, "", TypeFacet::Only(PropertyType::Studio));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn single_listing_catalog_behaves_per_query() {
        let catalog: Vec<Property> = seed_catalog()
            .into_iter()
            .filter(|p| p.id == "p1")
            .collect();

        let hit = filter_catalog(&catalog, "bandra", TypeFacet::All);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].id, "p1");

        let miss = filter_catalog(&catalog, "villa", TypeFacet::All);
        assert!(miss.is_empty());
    }

    #[test]
    fn facet_parse_falls_back_to_all() {
        assert_eq!(TypeFacet::parse("All"), TypeFacet::All);
        assert_eq!(TypeFacet::parse("garage"), TypeFacet::All);
        assert_eq!(
            TypeFacet::parse("Studio"),
            TypeFacet::Only(PropertyType::Studio)
        );
    }
}
