use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod device;
mod nav;
mod scroll;
mod services;
mod effects;
mod dom;
mod booking {
    pub mod fields;
    pub mod date;
    pub mod links;
    pub mod dispatch;
}
mod components {
    pub mod header;
    pub mod booking_form;
    pub mod reveal;
    pub mod scroll_indicator;
}
mod pages {
    pub mod home;
}

use pages::home::Home;


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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let viewport = dom::current_viewport();
    info!(
        "Starting {} site, width {}px, {:?}",
        config::site_config().business_name,
        viewport.width,
        device::classify(&viewport, config::site_config())
    );
    yew::Renderer::<App>::new().render();
}
