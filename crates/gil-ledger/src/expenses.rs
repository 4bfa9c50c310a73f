use serde::{Deserialize, Serialize};
use tracing::debug;

use gil_roles::{Role, RoleRegistry};
use gil_types::{AccountId, Arena, ExpenseId, ProjectId, Timestamp};

use crate::error::LedgerError;

/// A recorded expense awaiting (or holding) verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub project: ProjectId,
    pub amount: u64,
    pub recipient: AccountId,
    pub description: String,
    pub timestamp: Timestamp,
    /// Transitions false→true exactly once, never back.
    pub verified: bool,
    /// The verifier that approved the expense, once verified.
    pub verifier: Option<AccountId>,
}

/// Expense book with verifier-gated, one-time approval.
///
/// Recording an expense is permissionless; only the verification step is
/// gated, through a [`RoleRegistry`] administered by the owner fixed at
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLedger {
    expenses: Arena<ExpenseId, Expense>,
    verifiers: RoleRegistry,
}

impl ExpenseLedger {
    pub fn new(owner: AccountId) -> Self {
        Self {
            expenses: Arena::new(),
            verifiers: RoleRegistry::new(Role::Verifier, owner),
        }
    }

    /// Record an expense as unverified.
    pub fn record_expense(
        &mut self,
        project: ProjectId,
        amount: u64,
        recipient: AccountId,
        description: impl Into<String>,
        at: Timestamp,
    ) -> ExpenseId {
        let id = self.expenses.insert(Expense {
            project,
            amount,
            recipient,
            description: description.into(),
            timestamp: at,
            verified: false,
            verifier: None,
        });
        debug!(id = %id, project = %project, amount, "expense recorded");
        id
    }

    /// Approve an expense exactly once.
    ///
    /// Checks existence before authorization before state, so callers see
    /// `ExpenseNotFound` for unknown ids even when unauthorized. On success
    /// the flag and the verifier identity are set together; any failure
    /// leaves the record untouched.
    pub fn verify_expense(
        &mut self,
        sender: &AccountId,
        id: ExpenseId,
    ) -> Result<(), LedgerError> {
        let Some(expense) = self.expenses.get_mut(id) else {
            return Err(LedgerError::ExpenseNotFound(id));
        };
        if !self.verifiers.is_authorized(sender) {
            return Err(LedgerError::NotAuthorized {
                role: Role::Verifier,
                sender: sender.clone(),
            });
        }
        if expense.verified {
            return Err(LedgerError::AlreadyVerified(id));
        }

        expense.verified = true;
        expense.verifier = Some(sender.clone());
        debug!(id = %id, verifier = %sender, "expense verified");
        Ok(())
    }

    /// Owner-gated; idempotent on re-grant.
    pub fn add_verifier(
        &mut self,
        sender: &AccountId,
        account: AccountId,
    ) -> Result<(), LedgerError> {
        self.verifiers.grant(sender, account)?;
        Ok(())
    }

    /// Owner-gated; idempotent on unknown accounts.
    pub fn remove_verifier(
        &mut self,
        sender: &AccountId,
        account: &AccountId,
    ) -> Result<(), LedgerError> {
        self.verifiers.revoke(sender, account)?;
        Ok(())
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    /// `false` for unknown ids rather than an error.
    pub fn is_verified(&self, id: ExpenseId) -> bool {
        self.expenses.get(id).is_some_and(|e| e.verified)
    }

    pub fn is_verifier(&self, account: &AccountId) -> bool {
        self.verifiers.is_authorized(account)
    }

    pub fn owner(&self) -> &AccountId {
        self.verifiers.owner()
    }

    pub fn expense_count(&self) -> u64 {
        self.expenses.len()
    }
}
