// Accessibility helpers

use wildeast_tours::{Tour, Transition};

/// Id of the polite live region that announces the active tour.
pub const LIVE_REGION_ID: &str = "carousel-status";

/// Screen-reader utility class, injected with the page styles.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #E8B04B;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Text for the live region after the active panel changes.
#[must_use]
pub fn announcement(tour: &Tour, position: usize, len: usize) -> String {
    let mut text = format!("Tour {} of {len}: {}", position + 1, tour.title);
    if let Some(dates) = tour.dates() {
        text.push_str(", ");
        text.push_str(dates);
    }
    text
}

/// Live-region text for the state reached by `transition`.
#[must_use]
pub fn live_status(transition: Transition, tour: &Tour, position: usize, len: usize) -> String {
    match transition {
        Transition::Opened { .. } => format!("{} itinerary opened", tour.title),
        Transition::Closed { .. } => {
            format!("Itinerary closed. {}", announcement(tour, position, len))
        }
        _ => announcement(tour, position, len),
    }
}
