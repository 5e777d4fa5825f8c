use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod chart;
mod config;
mod emailjs;
mod scroll;

mod components {
    pub mod contact;
    pub mod counter;
    pub mod floating_cta;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod social_proof;
    pub mod technology;
    pub mod warranty;
}
mod pages {
    pub mod home;
}

use components::floating_cta::FloatingCta;
use components::navbar::Navbar;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
            <FloatingCta />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
