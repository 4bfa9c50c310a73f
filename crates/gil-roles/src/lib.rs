//! Role administration for the Giving Impact Ledger.
//!
//! A [`RoleRegistry`] is the only authorization primitive in GIL: a
//! capability set of account identities administered by a single owner.
//! Expense verification and impact reporting each embed one registry;
//! membership checks are pure lookups that default to "not authorized".

pub mod error;
pub mod registry;

pub use error::RoleError;
pub use registry::{Role, RoleRegistry};
