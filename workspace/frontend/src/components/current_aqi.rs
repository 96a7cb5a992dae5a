use yew::prelude::*;
use compute::view::{CurrentAqiView, PanelState};
use crate::ui::alert::Alert;
use crate::ui::loading::LoadingSpinner;

#[derive(Properties, PartialEq)]
pub struct CurrentAqiCardProps {
    pub panel: PanelState<CurrentAqiView>,
}

/// "Current Prediction" card; its header takes the category colour of the
/// last prediction shown and keeps it while loading or after an error.
#[function_component(CurrentAqiCard)]
pub fn current_aqi_card(props: &CurrentAqiCardProps) -> Html {
    let last_header_color = use_mut_ref(|| None::<&'static str>);
    let header_color = props.panel.header_color_after(*last_header_color.borrow());
    *last_header_color.borrow_mut() = header_color;

    let header_class = classes!(
        "card-header",
        "text-white",
        format!("bg-{}", header_color.unwrap_or("primary"))
    );

    html! {
        <div class="card shadow-sm mb-4">
            <div class={header_class}>
                <i class="fas fa-wind"></i>{" Current Prediction"}
            </div>
            <div class="card-body text-center" id="prediction-result">
                {match &props.panel {
                    PanelState::Idle => html! {
                        <p class="text-muted mb-0">{"Enter weather conditions and submit to get a prediction."}</p>
                    },
                    PanelState::Loading => html! { <LoadingSpinner /> },
                    PanelState::Failed(message) => html! { <Alert message={message.clone()} /> },
                    PanelState::Ready(view) => render_current(view),
                }}
            </div>
        </div>
    }
}

fn render_current(view: &CurrentAqiView) -> Html {
    html! {
        <>
            <div class="mb-2">
                <span class={classes!("aqi-category", view.category_class())}>{&view.category_label}</span>
            </div>
            <div class="aqi-display">{view.rounded_aqi.to_string()}</div>
            <p class="mb-1">{&view.message}</p>
            <p class="mt-3 text-muted small">
                <i class="fas fa-info-circle"></i>{" "}{view.footer()}
            </p>
        </>
    }
}
