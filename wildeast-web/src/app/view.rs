use crate::a11y::{LIVE_REGION_ID, live_status, visible_focus_css};
use crate::app::state::CarouselState;
use crate::components::brand::Brand;
use crate::components::itinerary_sheet::ItinerarySheet;
use crate::components::nav_arrow::NavArrow;
use crate::components::panel::{Panel, PanelPhase};
use crate::input::key_to_input;
use wildeast_tours::{CarouselInput, Direction, Site};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub site: Site,
}

#[function_component(Landing)]
pub fn landing(props: &Props) -> Html {
    let state = {
        let site = props.site.clone();
        use_reducer(move || CarouselState::new(site.carousel()))
    };
    let dispatch = {
        let state = state.clone();
        Callback::from(move |input: CarouselInput| state.dispatch(input))
    };

    // Closing the sheet unmounts the focused dialog; hand focus back so the
    // carousel keeps receiving key presses.
    let landing_ref = use_node_ref();
    {
        let landing_ref = landing_ref.clone();
        let restore = state.restores_focus();
        use_effect_with((state.carousel().is_open(), restore), move |&(_, restore)| {
            if restore && let Some(el) = landing_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let on_keydown = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(input) = key_to_input(&e.key()) {
                e.prevent_default();
                dispatch.emit(input);
            }
        })
    };

    let carousel = state.carousel();
    let catalog = carousel.catalog();
    let motion = props.site.motion();
    let active_index = carousel.active_index();
    let direction = carousel.direction();
    let generation = carousel.generation();

    let active_phase = if direction == Direction::Still {
        PanelPhase::Resting
    } else {
        PanelPhase::Entering
    };
    let on_open = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.emit(CarouselInput::OpenItinerary))
    };

    // Keyed by generation: a newer navigation remounts both panels and
    // restarts their animations.
    let mut panels: Vec<Html> = Vec::with_capacity(2);
    if let Some(index) = carousel
        .leaving_index()
        .filter(|&index| index != active_index)
    {
        panels.push(html! {
            <Panel
                key={format!("leaving-{generation}")}
                tour={catalog.tour(index).clone()}
                phase={PanelPhase::Leaving}
                {direction}
                motion={*motion}
                on_open={Callback::noop()}
            />
        });
    }
    panels.push(html! {
        <Panel
            key={format!("active-{generation}")}
            tour={carousel.active_tour().clone()}
            phase={active_phase}
            {direction}
            motion={*motion}
            {on_open}
        />
    });

    let showing = carousel.showing_tour().cloned();
    let link = showing
        .as_ref()
        .map(|tour| AttrValue::from(props.site.deep_link(tour).into_string()));
    let status = live_status(
        state.last_transition(),
        carousel.active_tour(),
        active_index,
        catalog.len().get(),
    );
    let snapshot = serde_json::to_string(&carousel.snapshot()).unwrap_or_default();
    let nav_disabled = !carousel.navigation_enabled();

    html! {
        <div
            class="landing"
            ref={landing_ref}
            tabindex="0"
            aria-roledescription="carousel"
            aria-label="Tours"
            data-state={snapshot}
            onkeydown={on_keydown}
        >
            <style>{ visible_focus_css() }</style>
            <Brand />
            <main id="main" class="stage">
                <div class="stage__panels">
                    { for panels }
                </div>
                <NavArrow
                    direction={Direction::Backward}
                    neighbour={AttrValue::from(carousel.previous_tour().title.clone())}
                    disabled={nav_disabled}
                    on_input={dispatch.clone()}
                />
                <NavArrow
                    direction={Direction::Forward}
                    neighbour={AttrValue::from(carousel.next_tour().title.clone())}
                    disabled={nav_disabled}
                    on_input={dispatch.clone()}
                />
            </main>
            <div id={LIVE_REGION_ID} class="sr-only" role="status" aria-live="polite">
                { status }
            </div>
            <ItinerarySheet
                tour={showing}
                {link}
                link_label={AttrValue::from(props.site.link_label().to_string())}
                motion={*motion}
                on_input={dispatch}
            />
        </div>
    }
}
