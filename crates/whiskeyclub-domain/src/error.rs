use crate::DocumentType;
use thiserror::Error;

/// Errors raised while constructing or hydrating domain documents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was supplied but is not usable (e.g. a blank id).
    #[error("invalid argument '{param}': {message}")]
    InvalidArgument { param: &'static str, message: String },

    /// A required value was absent.
    #[error("missing required value '{param}'")]
    MissingRequiredValue { param: &'static str },

    /// A stored document carries a type tag for a different kind of record.
    #[error("expected a {expected} document, found {found}")]
    UnexpectedDocumentType {
        expected: DocumentType,
        found: DocumentType,
    },
}

impl DomainError {
    pub fn blank(param: &'static str) -> Self {
        Self::InvalidArgument {
            param,
            message: format!("'{}' cannot be null or whitespace.", param),
        }
    }

    pub fn missing(param: &'static str) -> Self {
        Self::MissingRequiredValue { param }
    }

    /// Name of the offending parameter, when the error is about one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } | Self::MissingRequiredValue { param } => {
                Some(param)
            }
            Self::UnexpectedDocumentType { .. } => None,
        }
    }
}
