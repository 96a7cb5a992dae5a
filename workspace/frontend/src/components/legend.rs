use yew::prelude::*;
use compute::AqiCategory;

/// Static AQI scale: range and colour of every category.
#[function_component(AqiLegend)]
pub fn aqi_legend() -> Html {
    html! {
        <div class="card shadow-sm mb-4">
            <div class="card-header"><i class="fas fa-palette"></i>{" AQI Scale"}</div>
            <ul class="list-group list-group-flush">
                {for AqiCategory::ALL.iter().map(|category| html! {
                    <li class="list-group-item d-flex justify-content-between align-items-center" key={category.style_class()}>
                        <span>
                            <span class="legend-swatch" style={format!("background-color: {}", category.hex_color())}></span>
                            {category.label()}
                        </span>
                        <span class="text-muted small">{category.range_label()}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
