//! Fixed values for the carousel core.
//!
//! Copy that ends up in outbound messages has a default here and can be
//! replaced through the contact configuration; everything else only changes
//! through a reviewed code change.

// Logging targets ----------------------------------------------------------
pub(crate) const LOG_CAROUSEL: &str = "wildeast::carousel";
pub(crate) const LOG_CATALOG: &str = "wildeast::catalog";
pub(crate) const LOG_COMPOSER: &str = "wildeast::composer";

// Branding -----------------------------------------------------------------
pub const BRAND_NAME: &str = "WILD EAST EXPEDITIONS";

// Messaging ----------------------------------------------------------------
/// Build-time environment variable that replaces the configured recipient.
pub const RECIPIENT_ENV_VAR: &str = "WILDEAST_WHATSAPP_NUMBER";
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";
pub const DEFAULT_GREETING: &str = "Hi Wild East Expeditions!";
pub const DEFAULT_CLOSING: &str = "Could you share availability and pricing?";
pub const DEFAULT_SOURCE_TAG: &str = "Source: website tour carousel";
pub const DEFAULT_LINK_LABEL: &str = "Contact on WhatsApp";
pub(crate) const REFERENCE_PREFIX: &str = "RefID: ";
pub(crate) const DATES_PREFIX: &str = "Dates: ";
pub(crate) const TEXT_QUERY_KEY: &str = "text";

// Itinerary ----------------------------------------------------------------
/// Shown for tours whose catalog entry carries no itinerary.
pub const FALLBACK_ITINERARY: [&str; 4] = [
    "Day 1: Arrival, transfer to camp and evening briefing.",
    "Day 2: Full-day guided wildlife excursion.",
    "Day 3: Specialist species search with local trackers.",
    "Day 4: Morning activity, checkout and return transfer.",
];

// Motion -------------------------------------------------------------------
pub(crate) const PANEL_SLIDE_OFFSET_PX: f32 = 30.0;
pub(crate) const PANEL_START_OPACITY: f32 = 0.6;
pub(crate) const PANEL_ENTER_MS: u32 = 600;
pub(crate) const PANEL_EXIT_MS: u32 = 500;
pub(crate) const PANEL_EASING: [f32; 4] = [0.22, 1.0, 0.36, 1.0];
pub(crate) const SHEET_SPRING_STIFFNESS: f32 = 80.0;
pub(crate) const SHEET_SPRING_DAMPING: f32 = 15.0;
pub(crate) const BACKDROP_FADE_MS: u32 = 200;
pub(crate) const BACKDROP_OPACITY: f32 = 0.35;
pub(crate) const PAN_PERIOD_MS: u32 = 18_000;
pub(crate) const PAN_SCALE_FROM: f32 = 1.0;
pub(crate) const PAN_SCALE_TO: f32 = 1.08;
pub(crate) const PAN_TRANSLATE_PCT: f32 = 2.0;
