use yew::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod ui;

use pages::home::Home;
use ui::styles::GlobalStyles;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <GlobalStyles />
            <Home />
        </>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AQI Forecast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {:?}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
