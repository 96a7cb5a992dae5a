pub mod alert;
pub mod loading;
pub mod styles;
