pub mod current_aqi;
pub mod forecast;
pub mod legend;
pub mod model_status;
pub mod navbar;
pub mod prediction_form;
