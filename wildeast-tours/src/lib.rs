//! Wild East Expeditions tour carousel
//!
//! Platform-agnostic core for the tour landing page: the catalog, the carousel
//! state machine with its itinerary overlay, and the inquiry link composer.
//! This crate has no UI or browser dependencies.

pub mod carousel;
pub mod catalog;
pub mod composer;
pub mod composition;
pub mod config;
pub mod constants;
pub mod motion;
pub mod navigation;
pub mod overlay;
pub mod site;
pub mod tour;

// Re-export commonly used types
pub use carousel::{CarouselInput, CarouselSnapshot, TourCarousel, Transition};
pub use catalog::{CatalogError, TourCatalog};
pub use composer::{DeepLink, MessageComposer, RecipientId, decode_text};
pub use composition::{PanelLayers, itinerary_lines, resolve_layers, uses_fallback_itinerary};
pub use config::{ConfigError, ContactConfig};
pub use constants::{BRAND_NAME, FALLBACK_ITINERARY, RECIPIENT_ENV_VAR};
pub use motion::{BackdropFade, CubicBezier, MotionConfig, PanLoop, SheetSpring, SlideTransition};
pub use navigation::{Direction, NavigationController, NavigationState};
pub use overlay::{DismissSource, OverlayController, OverlayState};
pub use site::{BootError, EmbeddedData, Site, SiteDataSource};
pub use tour::{CompositionVariant, Tour};
