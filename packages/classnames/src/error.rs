use thiserror::Error;

/// Errors raised when decoding a class-name spec from untyped input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("Invalid class spec: {found} is not a string, null, false, object or array")]
    InvalidSpec { found: String },

    #[error("Invalid condition for '{name}': {found} is not a boolean, string, number or null")]
    InvalidCondition { name: String, found: String },
}

pub type SpecResult<T> = Result<T, SpecError>;
