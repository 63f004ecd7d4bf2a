use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("Geolocation failed: {0}")]
    Denied(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Finite,
    Positive,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotFinite { field } | ValidationError::NotPositive { field } => field,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            ValidationError::NotFinite { .. } => Rule::Finite,
            ValidationError::NotPositive { .. } => Rule::Positive,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Location unavailable: {0}")]
    LocationUnavailable(#[from] LocationError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("No location picked on the map")]
    FormNotOpen,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid session config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid session config: {0}")]
    Invalid(String),
}
