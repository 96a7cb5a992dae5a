pub mod health;
pub mod model_status;
pub mod prediction;
