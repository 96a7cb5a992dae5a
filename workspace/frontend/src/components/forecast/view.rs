use yew::prelude::*;
use compute::view::{ForecastView, PanelState, NO_FORECAST_DATA};
use crate::ui::alert::{Alert, AlertKind};
use crate::ui::loading::LoadingSpinner;
use super::chart::ForecastChartView;
use super::list::ForecastList;

#[derive(Properties, PartialEq)]
pub struct ForecastCardProps {
    pub panel: PanelState<ForecastView>,
}

#[function_component(ForecastCard)]
pub fn forecast_card(props: &ForecastCardProps) -> Html {
    html! {
        <div class="card shadow-sm mb-4">
            <div class="card-header">
                <i class="fas fa-calendar-alt"></i>{" Forecast"}
            </div>
            <div class="card-body" id="forecast-result">
                {match &props.panel {
                    PanelState::Idle => html! {
                        <p class="text-muted mb-0">{"The multi-day forecast appears here after a prediction."}</p>
                    },
                    PanelState::Loading => html! { <LoadingSpinner /> },
                    PanelState::Failed(message) => html! { <Alert message={message.clone()} /> },
                    PanelState::Ready(ForecastView::Empty) => html! {
                        <Alert message={NO_FORECAST_DATA.to_string()} kind={AlertKind::Warning} />
                    },
                    PanelState::Ready(ForecastView::Days { rows, chart }) => html! {
                        <>
                            <ForecastList rows={rows.clone()} />
                            <ForecastChartView chart={chart.clone()} />
                        </>
                    },
                }}
            </div>
        </div>
    }
}
