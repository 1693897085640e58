//! Current-panel index with wraparound in both directions.
use crate::catalog::TourCatalog;
use crate::tour::Tour;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Sign of the last index change. Only parameterizes the panel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    pub current_index: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    len: NonZeroUsize,
    state: NavigationState,
}

impl NavigationController {
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            state: NavigationState::default(),
        }
    }

    #[must_use]
    pub fn for_catalog(catalog: &TourCatalog) -> Self {
        Self::new(catalog.len())
    }

    /// Advance one panel, wrapping from the last tour to the first.
    pub fn next(&mut self) -> usize {
        self.state.direction = Direction::Forward;
        self.state.current_index = self.peek_next();
        self.state.current_index
    }

    /// Step back one panel, wrapping from the first tour to the last.
    pub fn previous(&mut self) -> usize {
        self.state.direction = Direction::Backward;
        self.state.current_index = self.peek_previous();
        self.state.current_index
    }

    #[must_use]
    pub fn peek_next(&self) -> usize {
        (self.state.current_index + 1) % self.len.get()
    }

    #[must_use]
    pub fn peek_previous(&self) -> usize {
        let len = self.len.get();
        (self.state.current_index + len - 1) % len
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.state.direction
    }

    #[must_use]
    pub const fn len(&self) -> NonZeroUsize {
        self.len
    }

    #[must_use]
    pub fn active_tour<'a>(&self, catalog: &'a TourCatalog) -> &'a Tour {
        catalog.tour(self.state.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn controller(len: usize) -> NavigationController {
        NavigationController::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn starts_at_first_panel_without_direction() {
        let nav = controller(3);
        assert_eq!(nav.state(), NavigationState::default());
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.direction(), Direction::Still);
    }

    #[test]
    fn next_wraps_after_last_panel() {
        let mut nav = controller(3);
        assert_eq!(nav.next(), 1);
        assert_eq!(nav.next(), 2);
        assert_eq!(nav.next(), 0);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn previous_wraps_before_first_panel() {
        let mut nav = controller(3);
        assert_eq!(nav.previous(), 2);
        assert_eq!(nav.direction(), Direction::Backward);
        assert_eq!(nav.previous(), 1);
    }

    #[test]
    fn single_panel_catalog_stays_put_but_tracks_direction() {
        let mut nav = controller(1);
        assert_eq!(nav.next(), 0);
        assert_eq!(nav.direction().sign(), 1);
        assert_eq!(nav.previous(), 0);
        assert_eq!(nav.direction().sign(), -1);
    }

    #[test]
    fn peeks_do_not_move_the_index() {
        let nav = controller(4);
        assert_eq!(nav.peek_next(), 1);
        assert_eq!(nav.peek_previous(), 3);
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn random_walks_stay_in_range_and_invert() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5AFA_121);
        for len in 1..=7 {
            let mut nav = controller(len);
            for _ in 0..200 {
                let before = nav.active_index();
                if rng.gen_bool(0.5) {
                    nav.next();
                    assert!(nav.active_index() < len);
                    nav.previous();
                } else {
                    nav.previous();
                    assert!(nav.active_index() < len);
                    nav.next();
                }
                assert_eq!(nav.active_index(), before);
                if rng.gen_bool(0.5) {
                    nav.next();
                } else {
                    nav.previous();
                }
                assert!(nav.active_index() < len);
            }
        }
    }
}
