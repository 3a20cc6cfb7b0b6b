//! Input validation errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("invalid e-mail address: {0}")]
    InvalidEmail(String),

    #[error("invalid account type: {0}")]
    InvalidAccountType(String),

    #[error("invalid id: {0}")]
    InvalidId(String),
}
