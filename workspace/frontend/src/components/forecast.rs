pub mod chart;
pub mod list;
pub mod view;

pub use view::ForecastCard;
