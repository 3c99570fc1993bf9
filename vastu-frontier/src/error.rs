//! Error types for frontier search

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Frontier search error type
#[derive(Error, Debug)]
pub enum FrontierError {
    /// Agent position does not map to a grid cell
    #[error("Position ({x:.3}, {y:.3}) is outside the grid bounds")]
    OutOfBounds {
        /// World X of the rejected position
        x: f32,
        /// World Y of the rejected position
        y: f32,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigLoadError> for FrontierError {
    fn from(e: ConfigLoadError) -> Self {
        FrontierError::Config(e.to_string())
    }
}

/// Result alias for frontier operations
pub type Result<T> = std::result::Result<T, FrontierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FrontierError::OutOfBounds { x: 1.5, y: -0.25 };
        assert_eq!(
            err.to_string(),
            "Position (1.500, -0.250) is outside the grid bounds"
        );

        let err: FrontierError = ConfigLoadError::Parse("bad indent".to_string()).into();
        assert!(matches!(err, FrontierError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: Parse error: bad indent");
    }
}
