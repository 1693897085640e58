//! Everything a front end needs, validated once at startup.
use crate::carousel::TourCarousel;
use crate::catalog::{CatalogError, TourCatalog};
use crate::composer::{DeepLink, MessageComposer};
use crate::config::{ConfigError, ContactConfig};
use crate::motion::MotionConfig;
use crate::tour::Tour;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of the catalog and contact configuration.
/// Platform-specific front ends provide their own implementation.
pub trait SiteDataSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the tour catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    fn load_catalog(&self) -> Result<TourCatalog, Self::Error>;

    /// Load the contact configuration used by the link composer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_contact(&self) -> Result<ContactConfig, Self::Error>;
}

/// Data embedded from the web assets at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedData;

impl SiteDataSource for EmbeddedData {
    type Error = BootError;

    fn load_catalog(&self) -> Result<TourCatalog, Self::Error> {
        Ok(TourCatalog::load_default()?)
    }

    fn load_contact(&self) -> Result<ContactConfig, Self::Error> {
        Ok(ContactConfig::load_default()?)
    }
}

#[derive(Debug, Clone)]
pub struct Site {
    catalog: Arc<TourCatalog>,
    composer: Arc<MessageComposer>,
    link_label: String,
    motion: MotionConfig,
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
            && Arc::ptr_eq(&self.composer, &other.composer)
            && self.link_label == other.link_label
            && self.motion == other.motion
    }
}

impl Site {
    /// Load catalog and contact data and validate both. A bad recipient fails
    /// here, before any link can be produced.
    ///
    /// # Errors
    ///
    /// Returns an error if either source fails or the configuration is invalid.
    pub fn boot<S>(source: &S, recipient_override: Option<&str>) -> Result<Self, BootError>
    where
        S: SiteDataSource,
        S::Error: Into<BootError>,
    {
        let catalog = source.load_catalog().map_err(Into::into)?;
        let contact = source
            .load_contact()
            .map_err(Into::into)?
            .with_recipient_override(recipient_override);
        Self::from_parts(catalog, &contact)
    }

    /// # Errors
    ///
    /// Returns an error if the contact configuration is invalid.
    pub fn from_parts(catalog: TourCatalog, contact: &ContactConfig) -> Result<Self, BootError> {
        let composer = contact.composer()?;
        log::info!(
            "site ready: {} tours, inquiries to {}",
            catalog.len(),
            composer.link_prefix()
        );
        Ok(Self {
            catalog: Arc::new(catalog),
            composer: Arc::new(composer),
            link_label: contact.link_label.clone(),
            motion: MotionConfig::default(),
        })
    }

    /// New ephemeral session on the first tour with the overlay closed.
    #[must_use]
    pub fn carousel(&self) -> TourCarousel {
        TourCarousel::new(Arc::clone(&self.catalog))
    }

    #[must_use]
    pub fn catalog(&self) -> &TourCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn composer(&self) -> &MessageComposer {
        &self.composer
    }

    #[must_use]
    pub fn deep_link(&self, tour: &Tour) -> DeepLink {
        self.composer.compose(tour)
    }

    #[must_use]
    pub fn link_label(&self) -> &str {
        &self.link_label
    }

    #[must_use]
    pub const fn motion(&self) -> &MotionConfig {
        &self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone)]
    struct FixtureSource {
        recipient: &'static str,
    }

    impl SiteDataSource for FixtureSource {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<TourCatalog, Self::Error> {
            Ok(TourCatalog::new(vec![Tour::new("x", "X").with_dates("JAN")])
                .unwrap_or_else(|_| unreachable!()))
        }

        fn load_contact(&self) -> Result<ContactConfig, Self::Error> {
            Ok(ContactConfig::for_recipient(self.recipient))
        }
    }

    impl From<Infallible> for BootError {
        fn from(value: Infallible) -> Self {
            match value {}
        }
    }

    #[test]
    fn embedded_site_boots() {
        let site = Site::boot(&EmbeddedData, None).unwrap();
        assert_eq!(site.catalog().len().get(), 3);
        assert_eq!(site.link_label(), "Contact on WhatsApp");
        let carousel = site.carousel();
        assert_eq!(carousel.active_tour().id, "masai-mara");
    }

    #[test]
    fn invalid_recipient_fails_boot() {
        let err = Site::boot(&FixtureSource { recipient: "+1555" }, None).unwrap_err();
        assert!(matches!(
            err,
            BootError::Config(ConfigError::InvalidRecipient(_))
        ));
    }

    #[test]
    fn override_is_validated_too() {
        let source = FixtureSource {
            recipient: "15550001234",
        };
        assert!(Site::boot(&source, Some("not-a-number")).is_err());
        let site = Site::boot(&source, Some("4915112345678")).unwrap();
        let tour = site.catalog().tour(0).clone();
        assert!(
            site.deep_link(&tour)
                .as_str()
                .starts_with("https://wa.me/4915112345678?text=")
        );
    }

    #[test]
    fn carousels_share_catalog_but_not_state() {
        let site = Site::boot(&EmbeddedData, None).unwrap();
        let mut first = site.carousel();
        first.next();
        let second = site.carousel();
        assert_eq!(second.active_index(), 0);
        assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
    }
}
