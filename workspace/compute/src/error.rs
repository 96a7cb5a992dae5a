use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Colour string is not `#rrggbb`
    #[error("Invalid hex color '{0}': expected #rrggbb")]
    InvalidHexColor(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
