pub mod check_upstream;
pub mod serve;

pub use check_upstream::check_upstream;
pub use serve::serve;
