use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: `{name}` must be a positive finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Step limit exceeded: no ground impact after {0} steps")]
    StepLimitExceeded(usize),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Rejects zero, negative, NaN and infinite values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}

/// Like [`require_positive`] but allows zero.
pub(crate) fn require_non_negative(
    name: &'static str,
    value: f64,
) -> Result<f64, SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}
