use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid option name: {0:?}")]
    InvalidOptionName(String),
    #[error("option {name}: min index {min} exceeds max index {max}")]
    InvalidRange { name: String, min: u32, max: u32 },
    #[error("option {name}: expected {expected} values for its index range, got {actual}")]
    ValueCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("option {name}: default value {value:?} is not a legal value")]
    IllegalDefault { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
