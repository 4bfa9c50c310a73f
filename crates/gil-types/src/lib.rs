//! Foundation types for the Giving Impact Ledger (GIL).
//!
//! This crate provides the identity, id-allocation, and temporal types used
//! throughout the GIL system. Every other GIL crate depends on `gil-types`.
//!
//! # Key Types
//!
//! - [`AccountId`] — Opaque, comparable identity supplied by the host
//! - [`Arena`] — Id-indexed record store doubling as the sequential allocator
//! - [`SequentialId`] — Contract shared by all typed ledger ids
//! - [`Timestamp`] / [`BlockHeight`] — Host-supplied temporal references

pub mod account;
pub mod arena;
pub mod error;
pub mod id;
pub mod temporal;

pub use account::AccountId;
pub use arena::Arena;
pub use error::TypeError;
pub use id::{
    DonationId, ExpenseId, MetricId, MilestoneId, ProjectId, SequentialId, UpdateId,
};
pub use temporal::{BlockHeight, Timestamp};
