use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// An update or delete matched zero rows.
    #[error("Record not found")]
    NotFound,
    #[error("{0}")]
    Store(String),
}
