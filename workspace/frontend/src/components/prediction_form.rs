use yew::prelude::*;
use web_sys::{FormData, HtmlFormElement};
use common::{FieldLimits, ModelType, PredictionForm};

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    /// Receives the raw form state; validation happens in the caller.
    pub on_submit: Callback<PredictionForm>,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(PredictionFormView)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Prediction form element is not mounted");
                return;
            };

            let form_data = match FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(e) => {
                    log::error!("Failed to read prediction form: {:?}", e);
                    return;
                }
            };
            let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();

            let raw = PredictionForm {
                temperature: field("temperature"),
                humidity: field("humidity"),
                wind_speed: field("wind_speed"),
                pressure: field("pressure"),
                model_type: field("model_type"),
            };
            log::debug!("Prediction form submitted: {:?}", raw);
            on_submit.emit(raw);
        })
    };

    html! {
        <form id="prediction-form" ref={form_ref} onsubmit={on_submit}>
            <NumberField limits={FieldLimits::TEMPERATURE} unit="°C" step="0.1" placeholder="25" />
            <NumberField limits={FieldLimits::HUMIDITY} unit="%" step="1" placeholder="60" />
            <NumberField limits={FieldLimits::WIND_SPEED} unit="km/h" step="0.1" placeholder="10" />
            <NumberField limits={FieldLimits::PRESSURE} unit="hPa" step="0.1" placeholder="1013" />

            <div class="mb-3">
                <label class="form-label d-block">{"Prediction Model"}</label>
                {for ModelType::ALL.iter().map(|model| {
                    let id = format!("model_type_{}", model.as_str());
                    html! {
                        <div class="form-check form-check-inline" key={model.as_str()}>
                            <input
                                class="form-check-input"
                                type="radio"
                                name="model_type"
                                id={id.clone()}
                                value={model.as_str()}
                                checked={*model == ModelType::default()}
                            />
                            <label class="form-check-label" for={id}>{model.status_name()}</label>
                        </div>
                    }
                })}
            </div>

            <button type="submit" class="btn btn-primary w-100">
                {if props.loading {
                    html! { <><span class="spinner-border spinner-border-sm"></span>{" Predicting..."}</> }
                } else {
                    html! { <><i class="fas fa-chart-line"></i>{" Get Prediction"}</> }
                }}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    limits: FieldLimits,
    unit: &'static str,
    step: &'static str,
    placeholder: &'static str,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let limits = props.limits;

    html! {
        <div class="mb-3">
            <label class="form-label" for={limits.field}>
                {format!("{} ({})", limits.label, props.unit)}
            </label>
            <input
                type="number"
                class="form-control"
                id={limits.field}
                name={limits.field}
                min={limits.min.to_string()}
                max={limits.max.to_string()}
                step={props.step}
                placeholder={props.placeholder}
                required={true}
            />
        </div>
    }
}
