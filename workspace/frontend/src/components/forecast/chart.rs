use yew::prelude::*;
use compute::view::ForecastChart;
use plotly::{Bar, Layout};
use plotly::common::{Line, Marker, Title};
use plotly::layout::{Axis, RangeMode};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub const CHART_ELEMENT_ID: &str = "forecast-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub chart: ForecastChart,
}

/// Bar chart of the forecast, one bar per day.
#[function_component(ForecastChartView)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.chart.clone()), move |(container_ref, chart)| {
        if container_ref.cast::<HtmlElement>().is_some() {
            match plot_arguments(chart) {
                Ok((data, layout)) => {
                    log::debug!("Drawing forecast chart with {} bar(s)", chart.len());
                    newPlot(CHART_ELEMENT_ID, data, layout);
                }
                Err(e) => log::error!("Failed to build forecast chart: {}", e),
            }
        }
        || ()
    });

    html! {
        <div id={CHART_ELEMENT_ID} ref={container_ref} style="width:100%; height:300px;"></div>
    }
}

/// Trace array and layout for `Plotly.newPlot`.
fn plot_arguments(chart: &ForecastChart) -> Result<(JsValue, JsValue), String> {
    let positions = chart.positions();
    let trace = Bar::new(positions.clone(), chart.values.clone())
        .name(chart.series_name)
        .marker(
            Marker::new()
                .color_array(chart.fill_colors.clone())
                .line(Line::new().width(chart.border_width)),
        );

    // Per-bar border colours are not expressible through the typed builder.
    let mut trace_json = serde_json::to_value(&trace).map_err(|e| e.to_string())?;
    trace_json["marker"]["line"]["color"] = serde_json::json!(chart.border_colors);

    let y_axis = Axis::new().title(Title::with_text(chart.y_axis_title));
    let y_axis = if chart.begin_at_zero {
        y_axis.range_mode(RangeMode::ToZero)
    } else {
        y_axis
    };

    // Repeated labels would merge into one category bar.
    let x_axis = Axis::new()
        .tick_values(positions)
        .tick_text(chart.labels.clone());

    let layout = Layout::new()
        .x_axis(x_axis)
        .y_axis(y_axis)
        .show_legend(false)
        .height(300);

    let data_js = js_sys::Array::new();
    data_js.push(&to_js(&trace_json)?);

    let layout_json = serde_json::to_value(&layout).map_err(|e| e.to_string())?;
    Ok((data_js.into(), to_js(&layout_json)?))
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    js_sys::JSON::parse(&value.to_string()).map_err(|e| format!("{:?}", e))
}
