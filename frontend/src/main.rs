use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod content;
mod counter;
mod visibility;
mod navigation;
mod popup;
mod accordion;
mod parallax;

mod components {
    pub mod animated_counter;
    pub mod faq_accordion;
    pub mod feature_card;
    pub mod feature_dialog;
    pub mod footer;
    pub mod image;
    pub mod nav;
    pub mod reveal;
    pub mod signup_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

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
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Logging is best effort; the page works without it.
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!("Could not initialize logging:", err.to_string());
    }

    info!("Starting {} landing page", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
