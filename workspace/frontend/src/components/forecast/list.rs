use yew::prelude::*;
use compute::view::ForecastRow;

#[derive(Properties, PartialEq)]
pub struct ForecastListProps {
    pub rows: Vec<ForecastRow>,
}

#[function_component(ForecastList)]
pub fn forecast_list(props: &ForecastListProps) -> Html {
    html! {
        <div class="mb-3">
            {for props.rows.iter().enumerate().map(|(index, row)| html! {
                <div class="forecast-item" key={index} style={format!("background-color: {}", row.background())}>
                    <div>
                        <strong>{&row.date_label}</strong>
                    </div>
                    <div>
                        <span class={classes!("badge", format!("bg-{}", row.badge_color()))}>{row.category.label()}</span>
                        {" "}
                        <strong>{row.rounded_aqi.to_string()}</strong>
                    </div>
                </div>
            })}
        </div>
    }
}
