use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wildeast_tours::{
    CarouselInput, CompositionVariant, ContactConfig, Direction, DismissSource, EmbeddedData, Site,
    Tour, TourCarousel, TourCatalog, Transition, decode_text, itinerary_lines, resolve_layers,
};

fn site() -> Site {
    Site::boot(&EmbeddedData, None).unwrap()
}

#[test]
fn shipped_catalog_covers_every_composition() {
    let site = site();
    let variants: Vec<CompositionVariant> = site
        .catalog()
        .iter()
        .map(|tour| resolve_layers(tour, true).variant())
        .collect();
    assert_eq!(
        variants,
        vec![
            CompositionVariant::Blended,
            CompositionVariant::AnimatedPan,
            CompositionVariant::Single,
        ]
    );
    for tour in site.catalog() {
        assert!(!itinerary_lines(tour).is_empty(), "{} has no days", tour.id);
    }
}

#[test]
fn browse_open_dismiss_and_continue() {
    let site = site();
    let mut carousel = site.carousel();
    assert_eq!(carousel.active_tour().id, "masai-mara");

    carousel.next();
    assert_eq!(carousel.active_tour().id, "ethiopia");
    assert_eq!(carousel.direction(), Direction::Forward);

    assert_eq!(carousel.open(), Transition::Opened { index: 1 });
    assert!(!carousel.navigation_enabled());
    assert_eq!(
        carousel.next(),
        Transition::NavigationLocked {
            attempted: Direction::Forward
        }
    );
    assert_eq!(
        carousel.apply(CarouselInput::ContentClick),
        Transition::Unchanged
    );
    assert_eq!(carousel.showing_tour().map(|t| t.id.as_str()), Some("ethiopia"));

    assert_eq!(
        carousel.apply(CarouselInput::Dismiss(DismissSource::Backdrop)),
        Transition::Closed { index: 1 }
    );
    carousel.next();
    carousel.next();
    assert_eq!(carousel.active_tour().id, "masai-mara");
}

#[test]
fn previous_from_first_wraps_to_last() {
    let site = site();
    let mut carousel = site.carousel();
    carousel.previous();
    assert_eq!(carousel.active_index(), site.catalog().len().get() - 1);
    assert_eq!(carousel.direction(), Direction::Backward);
}

#[test]
fn every_dismiss_source_lands_in_the_same_state() {
    let site = site();
    let sources = [
        CarouselInput::CloseItinerary,
        CarouselInput::Dismiss(DismissSource::Backdrop),
        CarouselInput::Dismiss(DismissSource::CloseButton),
        CarouselInput::Dismiss(DismissSource::EscapeKey),
    ];
    let snapshots: Vec<_> = sources
        .iter()
        .map(|&close| {
            let mut carousel = site.carousel();
            carousel.open();
            carousel.apply(close);
            carousel.snapshot()
        })
        .collect();
    assert!(snapshots.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(!snapshots[0].overlay.is_open());
}

#[test]
fn open_and_navigate_in_one_tick_opens_on_starting_tour() {
    let site = site();
    let mut carousel = site.carousel();
    let transitions = carousel.apply_tick(&[CarouselInput::Next, CarouselInput::OpenItinerary]);
    assert!(matches!(
        transitions[0],
        Transition::NavigationLocked { .. }
    ));
    assert_eq!(transitions[1], Transition::Opened { index: 0 });
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn every_shipped_tour_links_back_to_itself() {
    let site = site();
    for tour in site.catalog() {
        let link = site.deep_link(tour);
        let text = decode_text(link.as_str()).unwrap();
        assert!(text.contains(&format!("RefID: {}", tour.id)));
        assert!(text.contains(&tour.title));
        assert_eq!(text, site.composer().compose_text(tour));
    }
}

#[test]
fn composed_link_for_minimal_tour() {
    let catalog = TourCatalog::new(vec![Tour::new("x", "X").with_dates("JAN")]).unwrap();
    let site = Site::from_parts(catalog, &ContactConfig::for_recipient("15550001234")).unwrap();
    let link = site.deep_link(site.catalog().tour(0));
    assert!(link.as_str().starts_with("https://wa.me/15550001234?text="));
    assert!(link.text().unwrap().contains("RefID: x"));
}

#[test]
fn random_sessions_keep_overlay_and_index_consistent() {
    let catalog = Arc::new(TourCatalog::load_default().unwrap());
    let len = catalog.len().get();
    let inputs = [
        CarouselInput::Next,
        CarouselInput::Previous,
        CarouselInput::OpenItinerary,
        CarouselInput::CloseItinerary,
        CarouselInput::Dismiss(DismissSource::Backdrop),
        CarouselInput::ContentClick,
    ];
    for seed in [1_u64, 7, 0x00C0_FFEE] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut carousel = TourCarousel::new(Arc::clone(&catalog));
        let mut expected_index = 0_usize;
        for _ in 0..500 {
            let input = inputs[rng.gen_range(0..inputs.len())];
            let was_open = carousel.is_open();
            let showing_before = carousel.showing_tour().map(|t| t.id.clone());
            carousel.apply(input);
            if !was_open {
                match input {
                    CarouselInput::Next => expected_index = (expected_index + 1) % len,
                    CarouselInput::Previous => expected_index = (expected_index + len - 1) % len,
                    _ => {}
                }
            }
            assert_eq!(carousel.active_index(), expected_index);
            if was_open && carousel.is_open() {
                assert_eq!(
                    carousel.showing_tour().map(|t| t.id.clone()),
                    showing_before
                );
            }
        }
    }
}
