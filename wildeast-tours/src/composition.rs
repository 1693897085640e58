//! What the panel renderer needs to draw a tour: its image layers and the
//! itinerary to list in the overlay.
use crate::constants::FALLBACK_ITINERARY;
use crate::tour::{CompositionVariant, Tour};

/// Image layers for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayers<'a> {
    Single {
        background: &'a str,
    },
    /// `overlay` is composited over `background` with a multiply blend.
    Blended {
        background: &'a str,
        overlay: &'a str,
    },
    /// Looping scale/translate oscillation; `paused` when the panel is not active.
    AnimatedPan {
        background: &'a str,
        paused: bool,
    },
}

impl<'a> PanelLayers<'a> {
    /// Variant actually rendered, after fallbacks.
    #[must_use]
    pub const fn variant(&self) -> CompositionVariant {
        match self {
            Self::Single { .. } => CompositionVariant::Single,
            Self::Blended { .. } => CompositionVariant::Blended,
            Self::AnimatedPan { .. } => CompositionVariant::AnimatedPan,
        }
    }

    #[must_use]
    pub const fn background(&self) -> &'a str {
        match self {
            Self::Single { background }
            | Self::Blended { background, .. }
            | Self::AnimatedPan { background, .. } => *background,
        }
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<&'a str> {
        match self {
            Self::Blended { overlay, .. } => Some(*overlay),
            _ => None,
        }
    }
}

/// Resolve the layers for `tour`. A blended tour without an overlay image
/// skips the blend layer and renders as a single background.
#[must_use]
pub fn resolve_layers(tour: &Tour, is_active: bool) -> PanelLayers<'_> {
    let background = tour.background.as_str();
    match tour.composition {
        CompositionVariant::Single => PanelLayers::Single { background },
        CompositionVariant::Blended => match tour.overlay_image.as_deref() {
            Some(overlay) if !overlay.trim().is_empty() => PanelLayers::Blended {
                background,
                overlay,
            },
            _ => PanelLayers::Single { background },
        },
        CompositionVariant::AnimatedPan => PanelLayers::AnimatedPan {
            background,
            paused: !is_active,
        },
    }
}

/// Whether the generic itinerary replaces the tour's own. An empty list
/// counts as absent.
#[must_use]
pub fn uses_fallback_itinerary(tour: &Tour) -> bool {
    tour.itinerary.as_ref().is_none_or(Vec::is_empty)
}

/// Day descriptions to list in the itinerary overlay.
#[must_use]
pub fn itinerary_lines(tour: &Tour) -> Vec<&str> {
    match tour.itinerary.as_deref() {
        Some(days) if !days.is_empty() => days.iter().map(String::as_str).collect(),
        _ => FALLBACK_ITINERARY.to_vec(),
    }
}
