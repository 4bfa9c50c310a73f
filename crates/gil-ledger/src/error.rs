use gil_roles::{Role, RoleError};
use gil_types::{AccountId, ExpenseId, MetricId, MilestoneId, ProjectId};

/// Errors produced by ledger operations.
///
/// Every error is a value returned to the caller; gated reads that miss
/// degrade to neutral defaults instead and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("expense {0} not found")]
    ExpenseNotFound(ExpenseId),

    #[error("metric {0} not found")]
    MetricNotFound(MetricId),

    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("milestone {0} not found")]
    MilestoneNotFound(MilestoneId),

    #[error("{sender} does not hold the {role} role")]
    NotAuthorized { role: Role, sender: AccountId },

    #[error("expense {0} is already verified")]
    AlreadyVerified(ExpenseId),

    #[error("milestone {0} is already completed")]
    AlreadyCompleted(MilestoneId),

    #[error("project {0} is already closed")]
    AlreadyClosed(ProjectId),

    #[error(transparent)]
    Role(#[from] RoleError),
}
