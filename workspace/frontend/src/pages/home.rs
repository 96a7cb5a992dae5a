use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use common::PredictionForm;
use compute::view::{PredictionPanels, REQUEST_TIMED_OUT};
use compute::RequestTracker;
use crate::api_client::prediction::request_prediction;
use crate::components::current_aqi::CurrentAqiCard;
use crate::components::forecast::ForecastCard;
use crate::components::legend::AqiLegend;
use crate::components::model_status::ModelStatus;
use crate::components::navbar::Navbar;
use crate::components::prediction_form::PredictionFormView;
use crate::settings;

#[function_component(Home)]
pub fn home() -> Html {
    let panels = use_state(PredictionPanels::default);
    let tracker = use_mut_ref(RequestTracker::new);

    let on_submit = {
        let panels = panels.clone();
        let tracker = tracker.clone();

        Callback::from(move |form: PredictionForm| {
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Prediction form rejected: {}", err);
                    // Any request still in flight must not overwrite the message.
                    tracker.borrow_mut().begin();
                    panels.set(PredictionPanels::failed(err.to_string()));
                    return;
                }
            };

            let ticket = tracker.borrow_mut().begin();
            log::info!(
                "Requesting prediction #{} with model {}",
                ticket.generation(),
                request.model_type
            );
            panels.set(PredictionPanels::loading());

            let timeout_ms = settings::get_settings().request_timeout_ms;
            if timeout_ms > 0 {
                let panels = panels.clone();
                let tracker = tracker.clone();
                Timeout::new(timeout_ms, move || {
                    if tracker.borrow_mut().settle(ticket) {
                        log::warn!("Prediction #{} timed out after {} ms", ticket.generation(), timeout_ms);
                        panels.set(PredictionPanels::failed(REQUEST_TIMED_OUT));
                    }
                })
                .forget();
            }

            let panels = panels.clone();
            let tracker = tracker.clone();
            spawn_local(async move {
                let result = request_prediction(&request).await;
                if tracker.borrow_mut().settle(ticket) {
                    panels.set(PredictionPanels::from_result(result));
                } else {
                    log::debug!("Dropping superseded prediction #{}", ticket.generation());
                }
            });
        })
    };

    html! {
        <>
            <Navbar title="Air Quality Index Forecast" />
            <div class="container">
                <div class="row">
                    <div class="col-lg-4">
                        <div class="card shadow-sm mb-4">
                            <div class="card-header bg-primary text-white">
                                <i class="fas fa-sliders-h"></i>{" Weather Conditions"}
                            </div>
                            <div class="card-body">
                                <PredictionFormView
                                    on_submit={on_submit}
                                    loading={panels.current.is_loading()}
                                />
                            </div>
                        </div>
                        <ModelStatus />
                    </div>
                    <div class="col-lg-8">
                        <CurrentAqiCard panel={panels.current.clone()} />
                        <ForecastCard panel={panels.forecast.clone()} />
                        <AqiLegend />
                    </div>
                </div>
            </div>
        </>
    }
}
