use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gil_types::AccountId;

use crate::error::RoleError;

/// The delegated capabilities the platform recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May approve recorded expenses.
    Verifier,
    /// May update impact metric values.
    Reporter,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verifier => write!(f, "verifier"),
            Self::Reporter => write!(f, "reporter"),
        }
    }
}

/// Owner-administered capability set for a single role.
///
/// Membership is a plain set of identities: an account either holds the
/// capability or it does not. Unknown accounts are never authorized. Only
/// the owner identity fixed at construction may change membership; failed
/// administration leaves the set untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    role: Role,
    owner: AccountId,
    members: HashSet<AccountId>,
}

impl RoleRegistry {
    pub fn new(role: Role, owner: AccountId) -> Self {
        Self {
            role,
            owner,
            members: HashSet::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Grant the role to `account`. Idempotent: re-granting succeeds
    /// without effect.
    pub fn grant(&mut self, sender: &AccountId, account: AccountId) -> Result<(), RoleError> {
        self.require_owner(sender)?;
        if self.members.insert(account.clone()) {
            debug!(role = %self.role, account = %account, "role granted");
        }
        Ok(())
    }

    /// Revoke the role from `account`. Idempotent: revoking a non-member
    /// succeeds without effect.
    pub fn revoke(&mut self, sender: &AccountId, account: &AccountId) -> Result<(), RoleError> {
        self.require_owner(sender)?;
        if self.members.remove(account) {
            debug!(role = %self.role, account = %account, "role revoked");
        }
        Ok(())
    }

    /// Pure membership lookup; `false` for any identity never granted.
    pub fn is_authorized(&self, account: &AccountId) -> bool {
        self.members.contains(account)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn require_owner(&self, sender: &AccountId) -> Result<(), RoleError> {
        if sender != &self.owner {
            return Err(RoleError::NotOwner {
                role: self.role,
                sender: sender.clone(),
            });
        }
        Ok(())
    }
}
