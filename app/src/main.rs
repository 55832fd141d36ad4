#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod api;
mod components;
mod config;
mod pages;

use components::Navbar;
use pages::{RecipeView, ViewOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct Props {
    client: api::Client,
    options: ViewOptions,
}

#[function_component(App)]
fn app(Props { client, options }: &Props) -> Html {
    html! {
        <>
        <Navbar/>
        <main>
            <RecipeView client={client.clone()} options={*options}/>
        </main>
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = config::Config::new();
    log::info!("Using recipe service at {}", config.api_url);

    yew::start_app_with_props::<App>(Props {
        client: api::Client::new(config.api_url),
        options: config.options,
    });
}
