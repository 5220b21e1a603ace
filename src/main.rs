use log::info;
use yew::prelude::*;

mod config;
mod countdown;
mod navigation;
mod ticker;
mod components {
    pub mod countdown_display;
    pub mod cta_button;
    pub mod disclosure;
    pub mod section;
}
mod pages {
    pub mod sales;
}

use navigation::NavigationHandle;
use pages::sales::SalesPage;

#[function_component]
fn App() -> Html {
    let navigation = use_state(NavigationHandle::browser);

    info!("Rendering sales page");
    html! {
        <ContextProvider<NavigationHandle> context={(*navigation).clone()}>
            <SalesPage />
        </ContextProvider<NavigationHandle>>
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
