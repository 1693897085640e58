use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
}

/// Rendered instead of the carousel when startup validation fails.
#[function_component(ConfigErrorScreen)]
pub fn config_error_screen(props: &Props) -> Html {
    html! {
        <main class="config-error" role="alert">
            <h1>{"Tours are unavailable"}</h1>
            <p class="config-error__detail">{ props.message.clone() }</p>
        </main>
    }
}
