//! Browser-free logic behind the AQI forecast page: categories, colours,
//! date labels and the view models the frontend renders.

pub mod aqi;
pub mod dates;
pub mod error;
pub mod palette;
pub mod tracker;
pub mod view;

pub use aqi::{categorize, round_aqi, AqiCategory};
pub use error::ComputeError;
pub use palette::darken;
pub use tracker::{RequestTicket, RequestTracker};
