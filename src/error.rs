use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidVar { name: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
