use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Unknown category: '{category}'")]
    UnknownCategory { category: String },

    #[error("Invalid month: {month} (expected 1-12)")]
    UnknownMonth { month: u8 },

    #[error("Invalid input: {field} {reason} (got {value})")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
        value: f64,
    },

    #[error("Degenerate elasticity: coefficient must be non-zero and finite")]
    DegenerateElasticity,

    #[error("Invalid coefficient for {key}: {reason} (got {value})")]
    InvalidCoefficient {
        key: String,
        reason: &'static str,
        value: f64,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PricingResult<T> = Result<T, PricingError>;
