//! Carousel state machine.
//!
//! `TourCarousel` owns the navigation and overlay controllers and is the only
//! place inputs are applied. While the itinerary overlay is open every
//! navigation input is rejected, which keeps the overlay bound to the tour it
//! was opened for.
//!
//! ```text
//!            Next / Previous                 OpenItinerary
//!   ┌──────────────────────────┐   ┌──────────────────────────────┐
//!   │                          ▼   │                              ▼
//! Browsing(index) ─────────────────┘                    Reading(index)
//!   ▲                                                           │
//!   └──────── CloseItinerary / Dismiss(Backdrop|CloseButton|Esc) ┘
//!                      (Next / Previous while Reading: rejected)
//! ```
use crate::catalog::TourCatalog;
use crate::constants::LOG_CAROUSEL;
use crate::navigation::{Direction, NavigationController, NavigationState};
use crate::overlay::{DismissSource, OverlayController, OverlayState};
use crate::tour::Tour;
use serde::Serialize;
use std::sync::Arc;

/// A discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselInput {
    Next,
    Previous,
    OpenItinerary,
    CloseItinerary,
    Dismiss(DismissSource),
    /// Click inside the sheet content. Never closes the overlay.
    ContentClick,
}

impl CarouselInput {
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::Next | Self::Previous)
    }

    const fn direction(self) -> Direction {
        match self {
            Self::Next => Direction::Forward,
            Self::Previous => Direction::Backward,
            _ => Direction::Still,
        }
    }
}

/// Outcome of applying one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Navigated {
        from: usize,
        to: usize,
        direction: Direction,
    },
    Opened {
        index: usize,
    },
    Closed {
        index: usize,
    },
    /// Navigation attempted while the overlay is open.
    NavigationLocked {
        attempted: Direction,
    },
    Unchanged,
}

impl Transition {
    #[must_use]
    pub const fn changed_state(self) -> bool {
        !matches!(self, Self::NavigationLocked { .. } | Self::Unchanged)
    }
}

/// Plain-data view of the carousel for renderers and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub navigation: NavigationState,
    pub overlay: OverlayState,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct TourCarousel {
    catalog: Arc<TourCatalog>,
    navigation: NavigationController,
    overlay: OverlayController,
    generation: u64,
    leaving: Option<usize>,
}

impl PartialEq for TourCarousel {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
            && self.navigation == other.navigation
            && self.overlay == other.overlay
            && self.generation == other.generation
            && self.leaving == other.leaving
    }
}

impl TourCarousel {
    /// Fresh session: first tour active, overlay closed.
    #[must_use]
    pub fn new(catalog: Arc<TourCatalog>) -> Self {
        let navigation = NavigationController::for_catalog(&catalog);
        Self {
            catalog,
            navigation,
            overlay: OverlayController::new(),
            generation: 0,
            leaving: None,
        }
    }

    pub fn apply(&mut self, input: CarouselInput) -> Transition {
        let transition = match input {
            CarouselInput::Next | CarouselInput::Previous => self.navigate(input),
            CarouselInput::OpenItinerary => {
                let index = self.navigation.active_index();
                if self.overlay.open(index) {
                    Transition::Opened { index }
                } else {
                    Transition::Unchanged
                }
            }
            CarouselInput::CloseItinerary => self.close_with(None),
            CarouselInput::Dismiss(source) => self.close_with(Some(source)),
            CarouselInput::ContentClick => Transition::Unchanged,
        };
        log::debug!(target: LOG_CAROUSEL, "{input:?} -> {transition:?}");
        transition
    }

    /// Apply every input raised during one interaction tick.
    ///
    /// An open request in the tick wins: navigation inputs in the same tick
    /// are rejected, so the overlay opens on the tour that was active when
    /// the tick began.
    pub fn apply_tick(&mut self, inputs: &[CarouselInput]) -> Vec<Transition> {
        let opens = inputs
            .iter()
            .any(|input| matches!(input, CarouselInput::OpenItinerary));
        inputs
            .iter()
            .map(|&input| {
                if opens && input.is_navigation() {
                    log::debug!(target: LOG_CAROUSEL, "{input:?} dropped: open request in same tick");
                    Transition::NavigationLocked {
                        attempted: input.direction(),
                    }
                } else {
                    self.apply(input)
                }
            })
            .collect()
    }

    fn navigate(&mut self, input: CarouselInput) -> Transition {
        let attempted = input.direction();
        if self.overlay.is_open() {
            return Transition::NavigationLocked { attempted };
        }
        let from = self.navigation.active_index();
        let to = if attempted == Direction::Forward {
            self.navigation.next()
        } else {
            self.navigation.previous()
        };
        self.leaving = Some(from);
        self.generation = self.generation.wrapping_add(1);
        Transition::Navigated {
            from,
            to,
            direction: attempted,
        }
    }

    fn close_with(&mut self, source: Option<DismissSource>) -> Transition {
        let Some(index) = self.overlay.showing() else {
            return Transition::Unchanged;
        };
        let closed = match source {
            Some(source) => self.overlay.dismiss(source),
            None => self.overlay.close(),
        };
        if closed {
            Transition::Closed { index }
        } else {
            Transition::Unchanged
        }
    }

    pub fn next(&mut self) -> Transition {
        self.apply(CarouselInput::Next)
    }

    pub fn previous(&mut self) -> Transition {
        self.apply(CarouselInput::Previous)
    }

    pub fn open(&mut self) -> Transition {
        self.apply(CarouselInput::OpenItinerary)
    }

    pub fn close(&mut self) -> Transition {
        self.apply(CarouselInput::CloseItinerary)
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<TourCatalog> {
        &self.catalog
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.navigation.active_index()
    }

    #[must_use]
    pub fn active_tour(&self) -> &Tour {
        self.navigation.active_tour(&self.catalog)
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.navigation.direction()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Tour displayed by the overlay, if open.
    #[must_use]
    pub fn showing_tour(&self) -> Option<&Tour> {
        self.overlay.showing().map(|index| self.catalog.tour(index))
    }

    /// Arrows are disabled while the overlay is open.
    #[must_use]
    pub const fn navigation_enabled(&self) -> bool {
        !self.overlay.is_open()
    }

    #[must_use]
    pub fn next_tour(&self) -> &Tour {
        self.catalog.tour(self.navigation.peek_next())
    }

    #[must_use]
    pub fn previous_tour(&self) -> &Tour {
        self.catalog.tour(self.navigation.peek_previous())
    }

    /// Bumped on every navigation; keys the panel transition so a new slide
    /// supersedes one still in flight.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Panel that was active before the latest navigation.
    #[must_use]
    pub const fn leaving_index(&self) -> Option<usize> {
        self.leaving
    }

    #[must_use]
    pub const fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            navigation: self.navigation.state(),
            overlay: self.overlay.state(),
            generation: self.generation,
        }
    }
}
