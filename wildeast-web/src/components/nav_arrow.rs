use crate::input::is_activation_key;
use wildeast_tours::{CarouselInput, Direction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `Backward` or `Forward`.
    pub direction: Direction,
    /// Title of the tour this arrow moves to.
    pub neighbour: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<CarouselInput>,
}

#[must_use]
pub const fn arrow_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Backward => "Previous tour",
        Direction::Forward | Direction::Still => "Next tour",
    }
}

const fn arrow_input(direction: Direction) -> CarouselInput {
    match direction {
        Direction::Backward => CarouselInput::Previous,
        Direction::Forward | Direction::Still => CarouselInput::Next,
    }
}

#[function_component(NavArrow)]
pub fn nav_arrow(props: &Props) -> Html {
    let onclick = {
        let cb = props.on_input.clone();
        let input = arrow_input(props.direction);
        Callback::from(move |e: MouseEvent| {
            // The arrows sit on top of the panel; a click here must not open it.
            e.stop_propagation();
            cb.emit(input);
        })
    };
    let onkeydown = Callback::from(|e: KeyboardEvent| {
        if is_activation_key(&e.key()) {
            e.stop_propagation();
        }
    });
    let (class, glyph) = match props.direction {
        Direction::Backward => ("nav-arrow nav-arrow--prev", "‹"),
        Direction::Forward | Direction::Still => ("nav-arrow nav-arrow--next", "›"),
    };
    html! {
        <button
            type="button"
            {class}
            aria-label={arrow_label(props.direction)}
            title={props.neighbour.clone()}
            disabled={props.disabled}
            {onclick}
            {onkeydown}
        >
            <span aria-hidden="true">{ glyph }</span>
        </button>
    }
}
