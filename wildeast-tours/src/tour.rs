//! Tour records and their composition variants as they appear in the catalog JSON.
use serde::{Deserialize, Serialize};

/// Rendering strategy for a tour panel. Fixed per tour, never state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompositionVariant {
    /// One static background image.
    #[default]
    Single,
    /// Background plus an overlay image composited with a multiply blend.
    Blended,
    /// One background with a looping scale/translate oscillation.
    AnimatedPan,
}

impl CompositionVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Blended => "blended",
            Self::AnimatedPan => "animated_pan",
        }
    }
}

/// One travel offering as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub dates: Option<String>,
    pub background: String,
    #[serde(default, alias = "overlay", alias = "overlayImage")]
    pub overlay_image: Option<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default, alias = "compositionVariant", alias = "composition_variant")]
    pub composition: CompositionVariant,
    #[serde(default)]
    pub itinerary: Option<Vec<String>>,
}

impl Tour {
    /// Minimal tour with a single background, handy for fixtures.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            background: format!("images/{id}.jpg"),
            id,
            title: title.into(),
            dates: None,
            overlay_image: None,
            species: Vec::new(),
            composition: CompositionVariant::Single,
            itinerary: None,
        }
    }

    #[must_use]
    pub fn with_dates(mut self, dates: impl Into<String>) -> Self {
        self.dates = Some(dates.into());
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: CompositionVariant) -> Self {
        self.composition = composition;
        self
    }

    #[must_use]
    pub fn with_overlay_image(mut self, overlay: impl Into<String>) -> Self {
        self.overlay_image = Some(overlay.into());
        self
    }

    #[must_use]
    pub fn with_itinerary<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.itinerary = Some(days.into_iter().map(Into::into).collect());
        self
    }

    /// Dates with surrounding whitespace removed; blank dates count as absent.
    #[must_use]
    pub fn dates(&self) -> Option<&str> {
        self.dates
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
