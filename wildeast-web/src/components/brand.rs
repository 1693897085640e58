use wildeast_tours::BRAND_NAME;
use yew::prelude::*;

#[function_component(Brand)]
pub fn brand() -> Html {
    html! {
        <header class="brand" role="banner">
            <span class="brand__mark" aria-hidden="true">{"◆"}</span>
            <span class="brand__name">{ BRAND_NAME }</span>
        </header>
    }
}
