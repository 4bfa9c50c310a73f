use gil_types::AccountId;
use thiserror::Error;

use crate::registry::Role;

/// Errors produced by role administration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// Only the owner may grant or revoke a role.
    #[error("{sender} is not the owner and cannot administer the {role} role")]
    NotOwner { role: Role, sender: AccountId },
}
