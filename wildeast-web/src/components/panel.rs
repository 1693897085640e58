use crate::paths::image_url;
use wildeast_tours::{Direction, MotionConfig, PanelLayers, Tour, resolve_layers};
use yew::prelude::*;

/// Where a panel is in the slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// First render: shown in place without a slide.
    Resting,
    Entering,
    /// The previously active panel, animating out underneath the new one.
    Leaving,
}

impl PanelPhase {
    const fn class(self) -> &'static str {
        match self {
            Self::Resting => "panel--resting",
            Self::Entering => "panel--entering",
            Self::Leaving => "panel--leaving",
        }
    }

    const fn is_active(self) -> bool {
        !matches!(self, Self::Leaving)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub tour: Tour,
    pub phase: PanelPhase,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub motion: MotionConfig,
    pub on_open: Callback<()>,
}

/// Inline CSS custom properties driving the slide keyframes.
#[must_use]
pub fn slide_style(motion: &MotionConfig, direction: Direction, phase: PanelPhase) -> String {
    let slide = &motion.panel;
    let (from, to, opacity, duration) = match phase {
        PanelPhase::Resting => (0.0, 0.0, 1.0, 0),
        PanelPhase::Entering => (
            slide.enter_offset(direction),
            0.0,
            slide.start_opacity,
            slide.enter_ms,
        ),
        PanelPhase::Leaving => (0.0, slide.exit_offset(direction), 1.0, slide.exit_ms),
    };
    format!(
        "--slide-from:{from}px;--slide-to:{to}px;--slide-opacity:{opacity};--slide-ms:{duration}ms;--slide-ease:{}",
        slide.easing.css()
    )
}

fn pan_style(motion: &MotionConfig, paused: bool) -> String {
    let pan = &motion.pan;
    format!(
        "--pan-ms:{}ms;--pan-scale-from:{};--pan-scale-to:{};--pan-shift:{}%;animation-play-state:{}",
        pan.period_ms,
        pan.scale_from,
        pan.scale_to,
        pan.translate_pct,
        if paused { "paused" } else { "running" }
    )
}

fn background_style(reference: &str) -> String {
    format!("background-image:url('{}')", image_url(reference))
}

fn render_layers(layers: PanelLayers<'_>, motion: &MotionConfig) -> Html {
    match layers {
        PanelLayers::Single { background } => html! {
            <div class="panel__bg" style={background_style(background)}></div>
        },
        PanelLayers::Blended {
            background,
            overlay,
        } => html! {
            <>
                <div class="panel__bg" style={background_style(background)}></div>
                <div class="panel__overlay panel__overlay--multiply" style={background_style(overlay)}></div>
            </>
        },
        PanelLayers::AnimatedPan { background, paused } => {
            let style = format!("{};{}", background_style(background), pan_style(motion, paused));
            html! {
                <div class="panel__bg panel__bg--pan" {style}></div>
            }
        }
    }
}

#[function_component(Panel)]
pub fn panel(props: &Props) -> Html {
    let tour = &props.tour;
    let is_active = props.phase.is_active();
    let layers = resolve_layers(tour, is_active);
    let onclick = {
        let cb = props.on_open.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let class = classes!(
        "panel",
        format!("panel--{}", layers.variant().as_str()),
        props.phase.class()
    );
    let style = slide_style(&props.motion, props.direction, props.phase);

    html! {
        <section
            {class}
            {style}
            data-tour={tour.id.clone()}
            aria-hidden={(!is_active).to_string()}
            onclick={is_active.then_some(onclick)}
        >
            { render_layers(layers, &props.motion) }
            <div class="panel__content">
                <h1 class="panel__title">{ tour.title.clone() }</h1>
                { tour.dates().map(|dates| html! {
                    <p class="panel__dates chip">{ dates }</p>
                }).unwrap_or_default() }
                <ul class="panel__species" aria-label="Species">
                    { for tour.species.iter().map(|name| html! {
                        <li class="chip chip--species">{ name.clone() }</li>
                    }) }
                </ul>
                { if is_active {
                    html! { <p class="panel__hint">{"Click anywhere to view itinerary"}</p> }
                } else {
                    Html::default()
                } }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_panel_has_no_offset_or_duration() {
        let style = slide_style(&MotionConfig::default(), Direction::Still, PanelPhase::Resting);
        assert!(style.contains("--slide-from:0px"));
        assert!(style.contains("--slide-ms:0ms"));
    }

    #[test]
    fn entering_panel_starts_on_the_direction_side() {
        let motion = MotionConfig::default();
        let forward = slide_style(&motion, Direction::Forward, PanelPhase::Entering);
        assert!(forward.contains("--slide-from:30px"));
        assert!(forward.contains("--slide-opacity:0.6"));
        assert!(forward.contains("--slide-ms:600ms"));
        let backward = slide_style(&motion, Direction::Backward, PanelPhase::Entering);
        assert!(backward.contains("--slide-from:-30px"));
    }

    #[test]
    fn leaving_panel_exits_opposite_to_entry() {
        let style = slide_style(
            &MotionConfig::default(),
            Direction::Forward,
            PanelPhase::Leaving,
        );
        assert!(style.contains("--slide-to:-30px"));
        assert!(style.contains("--slide-ms:500ms"));
    }

    #[test]
    fn pan_style_reflects_pause_state() {
        let motion = MotionConfig::default();
        assert!(pan_style(&motion, true).ends_with("paused"));
        assert!(pan_style(&motion, false).ends_with("running"));
        assert!(pan_style(&motion, false).contains("--pan-ms:18000ms"));
    }
}
