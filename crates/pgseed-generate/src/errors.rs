use thiserror::Error;

/// Errors emitted while building the generator catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid generator id '{0}': expected '<category>.<method>'")]
    InvalidId(String),
    #[error("generator '{0}' is already registered")]
    DuplicateId(String),
}
