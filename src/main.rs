mod components;
mod config;
mod domain;
mod pages;
mod store;
mod waitlist;

use yew::prelude::*;

use crate::pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    // Reveal-hide styles only apply once we know the script is running.
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.class_list().add_1("has-reveal");
    }

    yew::Renderer::<App>::new().render();
}
