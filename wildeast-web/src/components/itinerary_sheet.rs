//! Bottom sheet listing the itinerary of the tour the overlay was opened for.
//!
//! The backdrop and the sheet are siblings, so a click on the sheet never
//! reaches the backdrop's dismiss handler.
use wildeast_tours::{CarouselInput, DismissSource, MotionConfig, Tour, itinerary_lines};
use yew::prelude::*;

pub const SHEET_TITLE_ID: &str = "itinerary-title";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Tour being shown; `None` while the overlay is closed.
    #[prop_or_default]
    pub tour: Option<Tour>,
    /// Inquiry deep link for `tour`.
    #[prop_or_default]
    pub link: Option<AttrValue>,
    pub link_label: AttrValue,
    #[prop_or_default]
    pub motion: MotionConfig,
    pub on_input: Callback<CarouselInput>,
}

fn sheet_style(motion: &MotionConfig) -> String {
    format!(
        "--sheet-ms:{}ms;--backdrop-ms:{}ms;--backdrop-opacity:{}",
        motion.sheet.settle_ms(),
        motion.backdrop.duration_ms,
        motion.backdrop.opacity
    )
}

#[function_component(ItinerarySheet)]
pub fn itinerary_sheet(props: &Props) -> Html {
    let sheet_ref = use_node_ref();
    {
        let sheet_ref = sheet_ref.clone();
        use_effect_with(props.tour.is_some(), move |is_open| {
            if *is_open && let Some(el) = sheet_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let Some(tour) = props.tour.as_ref() else {
        return Html::default();
    };

    let dismiss = |source: DismissSource| {
        let cb = props.on_input.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(CarouselInput::Dismiss(source));
        })
    };
    let on_content_click = {
        let cb = props.on_input.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(CarouselInput::ContentClick);
        })
    };

    html! {
        <div class="itinerary" style={sheet_style(&props.motion)}>
            <div
                class="itinerary__backdrop"
                role="presentation"
                onclick={dismiss(DismissSource::Backdrop)}
            ></div>
            <section
                class="itinerary__sheet"
                role="dialog"
                aria-modal="true"
                aria-labelledby={SHEET_TITLE_ID}
                tabindex="-1"
                ref={sheet_ref}
                onclick={on_content_click}
            >
                <header class="itinerary__header">
                    <h2 id={SHEET_TITLE_ID}>{ format!("{} itinerary", tour.title) }</h2>
                    <button
                        type="button"
                        class="itinerary__close"
                        aria-label="Close itinerary"
                        onclick={dismiss(DismissSource::CloseButton)}
                    >
                        {"×"}
                    </button>
                </header>
                { tour.dates().map(|dates| html! {
                    <p class="itinerary__dates chip">{ dates }</p>
                }).unwrap_or_default() }
                <ol class="itinerary__days">
                    { for itinerary_lines(tour).into_iter().map(|day| html! {
                        <li>{ day }</li>
                    }) }
                </ol>
                { props.link.clone().map(|href| html! {
                    <a
                        class="itinerary__cta"
                        {href}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { props.link_label.clone() }
                    </a>
                }).unwrap_or_default() }
            </section>
        </div>
    }
}
