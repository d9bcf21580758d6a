use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Items per page must be positive, got {0}")]
    InvalidItemsPerPage(usize),
}

pub type PaginationResult<T> = Result<T, PaginationError>;
