use thiserror::Error;

/// Misuse of the literal/dynamic calling convention
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template needs exactly one more fragment than values, got {fragments} fragments and {values} values")]
    Arity { fragments: usize, values: usize },
}

pub type TemplateResult<T> = Result<T, TemplateError>;
