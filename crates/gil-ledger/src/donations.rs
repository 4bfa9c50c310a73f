use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gil_types::{AccountId, Arena, DonationId, ProjectId, Timestamp};

/// A single recorded contribution. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub donor: AccountId,
    pub amount: u64,
    pub timestamp: Timestamp,
    /// Earmarked project, if the donor named one.
    pub project: Option<ProjectId>,
}

/// Append-only donation book with derived per-donor and global totals.
///
/// Donations are permissionless: any identity may give, so [`Self::donate`]
/// cannot fail. The aggregates are maintained alongside the records and
/// always equal the sum of the recorded amounts (globally and per donor).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationLedger {
    donations: Arena<DonationId, Donation>,
    by_donor: HashMap<AccountId, u64>,
    total: u64,
}

impl DonationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contribution and fold it into both aggregates.
    ///
    /// The record, the donor aggregate, and the global total change as one
    /// unit; the host serializes calls, so no reader can observe a partial
    /// application.
    pub fn donate(
        &mut self,
        donor: AccountId,
        amount: u64,
        project: Option<ProjectId>,
        at: Timestamp,
    ) -> DonationId {
        let id = self.donations.insert(Donation {
            donor: donor.clone(),
            amount,
            timestamp: at,
            project,
        });
        *self.by_donor.entry(donor.clone()).or_insert(0) += amount;
        self.total += amount;
        debug!(id = %id, donor = %donor, amount, "donation recorded");
        id
    }

    /// Sum of all recorded donation amounts.
    pub fn total_donations(&self) -> u64 {
        self.total
    }

    /// Cumulative amount given by `donor`; 0 for identities that never gave.
    pub fn donor_contribution(&self, donor: &AccountId) -> u64 {
        self.by_donor.get(donor).copied().unwrap_or(0)
    }

    pub fn donation(&self, id: DonationId) -> Option<&Donation> {
        self.donations.get(id)
    }

    pub fn donation_count(&self) -> u64 {
        self.donations.len()
    }

    /// All donations in recording order.
    pub fn donations(&self) -> impl Iterator<Item = (DonationId, &Donation)> {
        self.donations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gil_types::SequentialId;
    use proptest::prelude::*;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn records_a_donation() {
        let mut ledger = DonationLedger::new();
        let donor = AccountId::ephemeral();

        let id = ledger.donate(donor.clone(), 100, None, at(1));

        assert_eq!(id, DonationId::first());
        assert_eq!(ledger.total_donations(), 100);
        assert_eq!(ledger.donor_contribution(&donor), 100);

        let record = ledger.donation(id).unwrap();
        assert_eq!(record.donor, donor);
        assert_eq!(record.amount, 100);
        assert_eq!(record.timestamp, at(1));
        assert_eq!(record.project, None);
    }

    #[test]
    fn accumulates_repeat_donors() {
        let mut ledger = DonationLedger::new();
        let donor = AccountId::ephemeral();

        ledger.donate(donor.clone(), 100, None, at(1));
        ledger.donate(donor.clone(), 200, None, at(2));

        assert_eq!(ledger.total_donations(), 300);
        assert_eq!(ledger.donor_contribution(&donor), 300);
    }

    #[test]
    fn tracks_donors_independently() {
        let mut ledger = DonationLedger::new();
        let alice = AccountId::ephemeral();
        let bob = AccountId::ephemeral();

        ledger.donate(alice.clone(), 100, None, at(1));
        ledger.donate(bob.clone(), 200, None, at(2));

        assert_eq!(ledger.total_donations(), 300);
        assert_eq!(ledger.donor_contribution(&alice), 100);
        assert_eq!(ledger.donor_contribution(&bob), 200);
    }

    #[test]
    fn earmarks_a_project_when_named() {
        let mut ledger = DonationLedger::new();
        let project = ProjectId::first();

        let id = ledger.donate(AccountId::ephemeral(), 50, Some(project), at(1));

        assert_eq!(ledger.donation(id).unwrap().project, Some(project));
    }

    #[test]
    fn unknown_ids_and_donors_read_as_defaults() {
        let ledger = DonationLedger::new();
        assert_eq!(ledger.donation(DonationId::first()), None);
        assert_eq!(ledger.donor_contribution(&AccountId::ephemeral()), 0);
        assert_eq!(ledger.total_donations(), 0);
    }

    #[test]
    fn ids_increase_by_one_from_one() {
        let mut ledger = DonationLedger::new();
        for expected in 1..=5u64 {
            let id = ledger.donate(AccountId::ephemeral(), 1, None, at(expected));
            assert_eq!(id.as_u64(), expected);
        }
        assert_eq!(ledger.donation_count(), 5);
    }

    proptest! {
        /// For any sequence of donations, the global total equals the sum
        /// of all amounts and each donor aggregate equals the sum of that
        /// donor's amounts.
        #[test]
        fn aggregates_equal_recorded_sums(
            entries in proptest::collection::vec((0usize..4, 0u64..10_000), 0..64)
        ) {
            let donors: Vec<AccountId> = (0..4).map(|_| AccountId::ephemeral()).collect();
            let mut ledger = DonationLedger::new();
            let mut expected_total = 0u64;
            let mut expected_by_donor = [0u64; 4];

            for (tick, (donor, amount)) in entries.iter().copied().enumerate() {
                ledger.donate(donors[donor].clone(), amount, None, at(tick as u64));
                expected_total += amount;
                expected_by_donor[donor] += amount;
            }

            prop_assert_eq!(ledger.total_donations(), expected_total);
            for (donor, expected) in donors.iter().zip(expected_by_donor) {
                prop_assert_eq!(ledger.donor_contribution(donor), expected);
            }
            prop_assert_eq!(ledger.donation_count(), entries.len() as u64);
        }
    }
}
