use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide classes used by the status table, the current AQI panel and
/// the forecast list.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            .aqi-display {
                font-size: 3.5rem;
                font-weight: 700;
                line-height: 1;
                margin: 0.5rem 0;
            }
            .aqi-category {
                display: inline-block;
                padding: 0.35rem 0.9rem;
                border-radius: 1rem;
                font-weight: 600;
            }
            .aqi-good { background-color: #00e400; color: #000000; }
            .aqi-moderate { background-color: #ffff00; color: #000000; }
            .aqi-unhealthy-sensitive { background-color: #ff7e00; color: #000000; }
            .aqi-unhealthy { background-color: #ff0000; color: #ffffff; }
            .aqi-very-unhealthy { background-color: #8f3f97; color: #ffffff; }
            .aqi-hazardous { background-color: #7e0023; color: #ffffff; }
            .forecast-item {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 0.6rem 0.9rem;
                margin-bottom: 0.5rem;
                border-radius: 0.5rem;
            }
            .model-status-badge {
                display: inline-block;
                padding: 0.2rem 0.6rem;
                border-radius: 0.75rem;
                font-size: 0.8rem;
                font-weight: 600;
            }
            .status-online { background-color: #d1e7dd; color: #0f5132; }
            .status-offline { background-color: #f8d7da; color: #842029; }
            .legend-swatch {
                display: inline-block;
                width: 1rem;
                height: 1rem;
                border-radius: 0.2rem;
                margin-right: 0.5rem;
                vertical-align: middle;
            }
        "#)} />
    }
}
