use std::fmt;

use serde::{Deserialize, Serialize};

/// Contract shared by every ledger id space.
///
/// Ids start at 1 and advance by exactly one per allocation, so an id space
/// never reuses or skips a value. Each ledger owns an independent space;
/// interleaving operations across ledgers does not perturb any of them.
pub trait SequentialId: Copy + Eq + Ord {
    /// The first id ever allocated in a space.
    fn first() -> Self;
    /// The id immediately after `self`.
    fn next(self) -> Self;
    /// Reconstruct from a raw value (host persistence boundary).
    fn from_raw(raw: u64) -> Self;
    /// The raw value.
    fn as_u64(self) -> u64;
}

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl SequentialId for $name {
            fn first() -> Self {
                Self(1)
            }

            fn next(self) -> Self {
                Self(self.0 + 1)
            }

            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

sequential_id!(
    /// Identifier of a recorded donation.
    DonationId,
    "donation"
);
sequential_id!(
    /// Identifier of a recorded expense.
    ExpenseId,
    "expense"
);
sequential_id!(
    /// Identifier of an impact metric.
    MetricId,
    "metric"
);
sequential_id!(
    /// Identifier of a metric update in the audit history.
    UpdateId,
    "update"
);
sequential_id!(
    /// Identifier of a project.
    ProjectId,
    "project"
);
sequential_id!(
    /// Identifier of a project milestone.
    MilestoneId,
    "milestone"
);
