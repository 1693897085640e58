//! The ordered, validated list of tours shown by the carousel.
use crate::constants::LOG_CATALOG;
use crate::tour::Tour;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../wildeast-web/static/assets/data/tours.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("tour catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tour catalog must contain at least one tour")]
    Empty,
    #[error("tour at position {position} has a blank id")]
    BlankId { position: usize },
    #[error("duplicate tour id `{id}` at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
    #[error("tour `{id}` has a blank title")]
    BlankTitle { id: String },
    #[error("tour `{id}` has a blank background reference")]
    BlankBackground { id: String },
}

/// Immutable, non-empty sequence of tours with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourCatalog {
    tours: Vec<Tour>,
}

impl TourCatalog {
    /// Validate and wrap a list of tours.
    ///
    /// # Errors
    ///
    /// Returns an error when the list is empty or any tour has a blank id,
    /// a duplicate id, a blank title or a blank background. Ids are otherwise
    /// free-form; the composer percent-encodes them.
    pub fn new(tours: Vec<Tour>) -> Result<Self, CatalogError> {
        if tours.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(tours.len());
        for (position, tour) in tours.iter().enumerate() {
            if tour.id.trim().is_empty() {
                return Err(CatalogError::BlankId { position });
            }
            if let Some(&first) = seen.get(tour.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: tour.id.clone(),
                    first,
                    second: position,
                });
            }
            seen.insert(tour.id.as_str(), position);
            if tour.title.trim().is_empty() {
                return Err(CatalogError::BlankTitle {
                    id: tour.id.clone(),
                });
            }
            if tour.background.trim().is_empty() {
                return Err(CatalogError::BlankBackground {
                    id: tour.id.clone(),
                });
            }
        }
        log::debug!(target: LOG_CATALOG, "catalog validated with {} tours", tours.len());
        Ok(Self { tours })
    }

    /// Parse a JSON array of tours and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the tours fail validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tours: Vec<Tour> = serde_json::from_str(json)?;
        Self::new(tours)
    }

    /// Load the catalog shipped with the web assets.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog is invalid.
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG_DATA)
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.tours.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tour> {
        self.tours.get(index)
    }

    /// Tour at `index`, wrapping indices past the end.
    #[must_use]
    pub fn tour(&self, index: usize) -> &Tour {
        &self.tours[index % self.tours.len()]
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tours.iter().position(|t| t.id == id)
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tour> {
        self.tours.iter()
    }
}

impl<'a> IntoIterator for &'a TourCatalog {
    type Item = &'a Tour;
    type IntoIter = std::slice::Iter<'a, Tour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_loads_in_order() {
        let catalog = TourCatalog::load_default().unwrap();
        let ids: Vec<_> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["masai-mara", "ethiopia", "botswana"]);
        assert_eq!(catalog.len().get(), 3);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            TourCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            TourCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn duplicate_ids_report_both_positions() {
        let err = TourCatalog::new(vec![
            Tour::new("a", "A"),
            Tour::new("b", "B"),
            Tour::new("a", "A again"),
        ])
        .unwrap_err();
        match err {
            CatalogError::DuplicateId { id, first, second } => {
                assert_eq!(id, "a");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(matches!(
            TourCatalog::new(vec![Tour::new("ok", "Ok"), Tour::new(" ", "Blank")]),
            Err(CatalogError::BlankId { position: 1 })
        ));
        assert!(matches!(
            TourCatalog::new(vec![Tour::new("", "Empty")]),
            Err(CatalogError::BlankId { position: 0 })
        ));
    }

    #[test]
    fn free_form_ids_are_accepted() {
        let ids = ["MM_01", "Masai-Mara", "tour.1", "Masai Mara", "trailing-"];
        let catalog =
            TourCatalog::new(ids.iter().map(|id| Tour::new(*id, "T")).collect()).unwrap();
        assert_eq!(catalog.len().get(), ids.len());
        assert_eq!(catalog.position("tour.1"), Some(2));
        assert_eq!(catalog.by_id("MM_01").map(|t| t.id.as_str()), Some("MM_01"));
    }

    #[test]
    fn ids_differing_only_in_case_are_distinct() {
        let catalog =
            TourCatalog::new(vec![Tour::new("botswana", "A"), Tour::new("Botswana", "B")]).unwrap();
        assert_eq!(catalog.position("Botswana"), Some(1));
    }

    #[test]
    fn blank_title_and_background_are_rejected() {
        assert!(matches!(
            TourCatalog::new(vec![Tour::new("a", "  ")]),
            Err(CatalogError::BlankTitle { .. })
        ));
        let mut tour = Tour::new("a", "A");
        tour.background = String::new();
        assert!(matches!(
            TourCatalog::new(vec![tour]),
            Err(CatalogError::BlankBackground { .. })
        ));
    }

    #[test]
    fn camel_case_catalog_keeps_composition() {
        let catalog = TourCatalog::from_json(
            r#"[{
                "id": "masai-mara",
                "title": "MASAI MARA",
                "background": "images/topo.jpg",
                "overlayImage": "images/lion.jpg",
                "compositionVariant": "blended"
            }]"#,
        )
        .unwrap();
        let tour = catalog.tour(0);
        assert_eq!(tour.composition, crate::tour::CompositionVariant::Blended);
        assert_eq!(tour.overlay_image.as_deref(), Some("images/lion.jpg"));
    }

    #[test]
    fn invalid_json_surfaces_parse_error() {
        let err = TourCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn lookups_and_wrapping_access() {
        let catalog = TourCatalog::new(vec![
            Tour::new("a", "A"),
            Tour::new("b", "B"),
            Tour::new("c", "C"),
        ])
        .unwrap();
        assert_eq!(catalog.position("c"), Some(2));
        assert_eq!(catalog.by_id("b").map(|t| t.title.as_str()), Some("B"));
        assert!(catalog.get(3).is_none());
        assert_eq!(catalog.tour(4).id, "b");
        let via_into: Vec<_> = (&catalog).into_iter().map(|t| t.id.clone()).collect();
        assert_eq!(via_into, vec!["a", "b", "c"]);
    }
}
