use wildeast_tours::{CarouselInput, DismissSource, Tour};
use wildeast_web::a11y::announcement;
use wildeast_web::components::nav_arrow::arrow_label;
use wildeast_web::input::key_to_input;
use wildeast_web::paths::{asset_path, image_url};

#[test]
fn asset_paths_are_root_anchored() {
    let path = asset_path("images/masai-topography.jpg");
    assert!(path.starts_with('/'));
    assert!(path.ends_with("/images/masai-topography.jpg"));
    assert_eq!(image_url("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
}

#[test]
fn escape_maps_to_dismiss() {
    assert_eq!(
        key_to_input("Escape"),
        Some(CarouselInput::Dismiss(DismissSource::EscapeKey))
    );
    assert_eq!(key_to_input("Tab"), None);
}

#[test]
fn arrow_labels_are_stable() {
    assert_eq!(arrow_label(wildeast_tours::Direction::Backward), "Previous tour");
    assert_eq!(arrow_label(wildeast_tours::Direction::Forward), "Next tour");
}

#[test]
fn announcement_omits_missing_dates() {
    assert_eq!(
        announcement(&Tour::new("a", "ALPHA"), 1, 4),
        "Tour 2 of 4: ALPHA"
    );
}
