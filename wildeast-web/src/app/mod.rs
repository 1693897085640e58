use crate::components::config_error::ConfigErrorScreen;
use yew::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

pub use view::Landing;

#[function_component(App)]
pub fn app() -> Html {
    match bootstrap::site() {
        Ok(site) => html! { <Landing site={site.clone()} /> },
        Err(err) => html! {
            <ConfigErrorScreen message={AttrValue::from(err.to_string())} />
        },
    }
}
