use wildeast_tours::{CarouselInput, DismissSource};

// Keyboard mapping for the landing page. Inputs that make no sense in the
// current state (Enter while reading, Escape while browsing) are still mapped;
// the carousel turns them into no-ops.
#[must_use]
pub fn key_to_input(key: &str) -> Option<CarouselInput> {
    match key {
        "ArrowRight" | "Right" => Some(CarouselInput::Next),
        "ArrowLeft" | "Left" => Some(CarouselInput::Previous),
        "Enter" => Some(CarouselInput::OpenItinerary),
        "Escape" | "Esc" => Some(CarouselInput::Dismiss(DismissSource::EscapeKey)),
        _ => None,
    }
}

/// Keys an arrow button handles itself; the landing page must not also see them.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn key_maps() {
        assert_eq!(key_to_input("ArrowRight"), Some(CarouselInput::Next));
        assert_eq!(key_to_input("ArrowLeft"), Some(CarouselInput::Previous));
        assert_eq!(key_to_input("Enter"), Some(CarouselInput::OpenItinerary));
        assert_eq!(
            key_to_input("Escape"),
            Some(CarouselInput::Dismiss(DismissSource::EscapeKey))
        );
        assert_eq!(key_to_input("x"), None);
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("ArrowLeft"));
    }
}
