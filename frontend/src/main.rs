use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod scroll;
mod components {
    pub mod form_field;
    pub mod header;
}
mod pages {
    pub mod home;
    pub mod coming_soon;
}
mod hire_us {
    pub mod fields;
    pub mod form_state;
    pub mod validator;
    pub mod controller;
    pub mod error_alert;
    pub mod gratitude;
    pub mod page;
}

use components::header::Header;
use hire_us::page::HireUs;
use pages::{
    home::Home,
    coming_soon::ComingSoon,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/hireUs")]
    HireUs,
    #[at("/ourWork")]
    OurWork,
    #[at("/collaborate")]
    Collaborate,
    #[at("/track")]
    Track,
    #[at("/insight")]
    Insight,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::HireUs => {
            info!("Rendering Hire Us page");
            html! { <HireUs /> }
        },
        Route::OurWork => {
            info!("Rendering Our Work page");
            html! { <ComingSoon title="Our Work" /> }
        },
        Route::Collaborate => {
            info!("Rendering Collaborate page");
            html! { <ComingSoon title="Collaborate" /> }
        },
        Route::Track => {
            info!("Rendering Track page");
            html! { <ComingSoon title="Track" /> }
        },
        Route::Insight => {
            info!("Rendering Insight page");
            html! { <ComingSoon title="Insight" /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <ComingSoon title="Page not found" /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
