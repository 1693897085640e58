//! Itinerary overlay lifecycle.
//!
//! The overlay remembers which tour it was opened for, so the sheet keeps
//! showing that tour even if the active panel were to change underneath it.
use crate::constants::LOG_CAROUSEL;
use serde::Serialize;

/// Inputs that close the overlay. All of them produce the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissSource {
    /// Click on the dimmed area outside the sheet.
    Backdrop,
    /// The explicit close control inside the sheet.
    CloseButton,
    EscapeKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OverlayState {
    showing: Option<usize>,
}

impl OverlayState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.showing.is_some()
    }

    /// Catalog index of the tour the overlay was opened for.
    #[must_use]
    pub const fn showing(self) -> Option<usize> {
        self.showing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayController {
    state: OverlayState,
}

impl OverlayController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for the tour at `index`. Returns `false` when already open, in
    /// which case the originally captured tour is kept.
    pub fn open(&mut self, index: usize) -> bool {
        if self.state.is_open() {
            return false;
        }
        self.state.showing = Some(index);
        true
    }

    /// Close the overlay. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        self.state.showing.take().is_some()
    }

    pub fn dismiss(&mut self, source: DismissSource) -> bool {
        let closed = self.close();
        if closed {
            log::debug!(target: LOG_CAROUSEL, "overlay dismissed via {source:?}");
        }
        closed
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub const fn showing(&self) -> Option<usize> {
        self.state.showing()
    }

    #[must_use]
    pub const fn state(&self) -> OverlayState {
        self.state
    }
}
