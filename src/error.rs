//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("{field} must be greater than zero")]
    ZeroBudget { field: &'static str },

    #[error("Invalid pagination config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
