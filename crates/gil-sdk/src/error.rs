use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    #[error("ledger error: {0}")]
    Ledger(#[from] gil_ledger::LedgerError),

    #[error("role error: {0}")]
    Role(#[from] gil_roles::RoleError),

    #[error("invalid account: {0}")]
    Account(#[from] gil_types::TypeError),
}

pub type SdkResult<T> = Result<T, SdkError>;
