use std::rc::Rc;
use wildeast_tours::{CarouselInput, TourCarousel, Transition};
use yew::prelude::*;

/// Per-page-load carousel session. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    carousel: TourCarousel,
    last: Transition,
}

impl CarouselState {
    #[must_use]
    pub const fn new(carousel: TourCarousel) -> Self {
        Self {
            carousel,
            last: Transition::Unchanged,
        }
    }

    #[must_use]
    pub const fn carousel(&self) -> &TourCarousel {
        &self.carousel
    }

    /// Most recent state-changing transition.
    #[must_use]
    pub const fn last_transition(&self) -> Transition {
        self.last
    }

    /// True right after the overlay closed, when keyboard focus should go
    /// back to the carousel.
    #[must_use]
    pub const fn restores_focus(&self) -> bool {
        !self.carousel.is_open() && matches!(self.last, Transition::Closed { .. })
    }
}

impl Reducible for CarouselState {
    type Action = CarouselInput;

    // Rejected and no-op inputs hand back the same Rc so nothing re-renders.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.carousel.clone();
        let transition = carousel.apply(action);
        if !transition.changed_state() {
            return self;
        }
        Rc::new(Self {
            carousel,
            last: transition,
        })
    }
}
