use yew::prelude::*;

/// Centered Bootstrap spinner shown while a region waits for the server.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="d-flex justify-content-center">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{"Loading..."}</span>
            </div>
        </div>
    }
}
