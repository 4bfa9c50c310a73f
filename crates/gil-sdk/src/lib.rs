//! High-level SDK for the Giving Impact Ledger.
//!
//! Provides a unified API over the four GIL ledgers for applications
//! embedding the bookkeeping core. The host supplies identities and a
//! [`HostClock`]; the platform supplies everything else.

pub mod clock;
pub mod error;
pub mod platform;

pub use clock::{HostClock, ManualClock, SystemClock};
pub use error::{SdkError, SdkResult};
pub use platform::GivingPlatform;

// Re-export key types
pub use gil_ledger::{
    Donation, Expense, ImpactMetric, ImpactUpdate, LedgerError, Milestone, Project, ProjectStatus,
};
pub use gil_roles::Role;
pub use gil_types::{
    AccountId, BlockHeight, DonationId, ExpenseId, MetricId, MilestoneId, ProjectId, Timestamp,
    UpdateId,
};
