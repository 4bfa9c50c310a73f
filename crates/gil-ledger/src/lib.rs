//! Core ledgers of the Giving Impact Ledger (GIL).
//!
//! This crate is the heart of GIL. It provides four independent,
//! structurally identical ledger state machines:
//!
//! - [`DonationLedger`] — permissionless contributions with per-donor and
//!   global running totals
//! - [`ExpenseLedger`] — recorded expenses with verifier-gated, one-time
//!   approval
//! - [`ImpactLedger`] — impact metrics with reporter-gated value updates and
//!   an append-only update history
//! - [`ProjectLedger`] — projects and milestones with one-time completion
//!
//! Each ledger is an explicit state struct owned by a single context; all
//! mutation goes through `&mut self` methods invoked once per host request.
//! The host serializes calls, so an operation either applies its state
//! changes as a unit or fails leaving nothing behind.

pub mod donations;
pub mod error;
pub mod expenses;
pub mod impact;
pub mod projects;

pub use donations::{Donation, DonationLedger};
pub use error::LedgerError;
pub use expenses::{Expense, ExpenseLedger};
pub use impact::{ImpactLedger, ImpactMetric, ImpactUpdate};
pub use projects::{Milestone, Project, ProjectLedger, ProjectStatus};
