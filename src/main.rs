use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod contact {
    pub mod controller;
    pub mod relay;
    pub mod status;
    pub mod validation;
}
mod components {
    pub mod char_counter;
    pub mod contact_form;
    pub mod header;
    pub mod konami;
    pub mod reveal;
    pub mod support;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::{Home, PAGE_CSS},
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{PAGE_CSS}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
