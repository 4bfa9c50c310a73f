use thiserror::Error;

/// Errors produced by type constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("account address must not be empty")]
    EmptyAddress,
}
