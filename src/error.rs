use thiserror::Error;

/// Errors raised by the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The value handed to the tokenizer was not text.
    #[error("invalid input type: expected string, got {type_name}")]
    InvalidInputType {
        /// Runtime type of the rejected value (`"null"`, `"number"`, ...).
        type_name: String,
    },
}

impl CaseError {
    pub(crate) fn invalid_input(type_name: &str) -> Self {
        CaseError::InvalidInputType {
            type_name: type_name.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            CaseError::InvalidInputType { type_name } => type_name,
        }
    }
}
