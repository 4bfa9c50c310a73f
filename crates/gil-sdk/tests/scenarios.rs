//! End-to-end scenarios across the assembled platform.

use gil_sdk::{
    AccountId, BlockHeight, GivingPlatform, LedgerError, ManualClock, ProjectStatus, SdkError,
};

fn platform() -> (GivingPlatform<ManualClock>, AccountId) {
    let owner = AccountId::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").unwrap();
    let clock = ManualClock::new(1_000, 100);
    (GivingPlatform::with_clock(owner.clone(), clock), owner)
}

#[test]
fn clean_water_project_lifecycle() {
    let (mut platform, _owner) = platform();

    let project = platform.create_project("Clean Water", "wells for rural villages", 10_000);
    assert_eq!(project.to_string(), "project:1");
    assert_eq!(
        platform.project(project).unwrap().start_block,
        BlockHeight::new(100)
    );

    let milestone = platform
        .add_milestone(project, "foundation", BlockHeight::new(400))
        .unwrap();
    assert!(!platform.milestone(milestone).unwrap().completed);

    platform.clock().advance(0, 250);
    platform.complete_milestone(milestone).unwrap();

    let completed = platform.milestone(milestone).unwrap();
    assert!(completed.completed);
    assert_eq!(completed.completion_block, Some(BlockHeight::new(350)));

    // Completing again is a one-time transition violation.
    let error = platform.complete_milestone(milestone).unwrap_err();
    assert_eq!(
        error,
        SdkError::Ledger(LedgerError::AlreadyCompleted(milestone))
    );

    platform.close_project(project).unwrap();
    assert_eq!(
        platform.project(project).unwrap().status,
        ProjectStatus::Closed
    );
}

#[test]
fn donations_fund_expenses_that_verifiers_approve() {
    let (mut platform, owner) = platform();
    let donor = AccountId::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG").unwrap();
    let verifier = AccountId::new("ST3AM1A56AK2C1XAFJ4115ZSV26EB49BVQ10MGCS0").unwrap();
    let supplier = AccountId::ephemeral();

    let project = platform.create_project("Clean Water", "wells", 10_000);
    platform.donate(donor.clone(), 2_500, Some(project));
    platform.donate(donor.clone(), 500, None);
    assert_eq!(platform.total_donations(), 3_000);
    assert_eq!(platform.donor_contribution(&donor), 3_000);

    let expense = platform.record_expense(project, 1_200, supplier, "drilling rig rental");
    assert!(!platform.is_verified(expense));

    // An identity without the verifier role cannot approve, and the failed
    // attempt leaves the expense untouched.
    let error = platform.verify_expense(&donor, expense).unwrap_err();
    assert!(matches!(
        error,
        SdkError::Ledger(LedgerError::NotAuthorized { .. })
    ));
    assert!(!platform.is_verified(expense));

    platform.add_verifier(&owner, verifier.clone()).unwrap();
    platform.verify_expense(&verifier, expense).unwrap();
    assert!(platform.is_verified(expense));
    assert_eq!(
        platform.expense(expense).unwrap().verifier,
        Some(verifier.clone())
    );

    let error = platform.verify_expense(&verifier, expense).unwrap_err();
    assert_eq!(
        error,
        SdkError::Ledger(LedgerError::AlreadyVerified(expense))
    );
}

#[test]
fn impact_reporting_round_trip() {
    let (mut platform, owner) = platform();
    let reporter = AccountId::ephemeral();
    let outsider = AccountId::ephemeral();

    let project = platform.create_project("Clean Water", "wells", 10_000);
    let metric = platform.create_metric(project, "wells drilled", "functioning wells", 500, "wells");
    assert_eq!(platform.metric_progress(metric), 0);

    platform.add_reporter(&owner, reporter.clone()).unwrap();

    for (value, expected) in [(100, 20), (250, 50), (500, 100)] {
        platform
            .update_metric_value(&reporter, metric, value)
            .unwrap();
        assert_eq!(platform.metric_progress(metric), expected);
    }

    // A non-reporter cannot move the value, and the current value holds.
    let error = platform
        .update_metric_value(&outsider, metric, 9_999)
        .unwrap_err();
    assert!(matches!(
        error,
        SdkError::Ledger(LedgerError::NotAuthorized { .. })
    ));
    assert_eq!(platform.metric(metric).unwrap().current_value, 500);

    // The audit history names every transition in order.
    let transitions: Vec<(u64, u64)> = platform
        .impact()
        .updates_for(metric)
        .map(|(_, u)| (u.old_value, u.new_value))
        .collect();
    assert_eq!(transitions, vec![(0, 100), (100, 250), (250, 500)]);
}

#[test]
fn ledger_id_spaces_are_independent() {
    let (mut platform, _owner) = platform();
    let donor = AccountId::ephemeral();

    let project = platform.create_project("A", "a", 1);
    let donation = platform.donate(donor.clone(), 10, None);
    let expense = platform.record_expense(project, 5, donor.clone(), "receipt");
    let metric = platform.create_metric(project, "m", "d", 10, "u");

    // Interleaving operations across ledgers never perturbs a counter:
    // each space still hands out 1, then 2.
    assert_eq!(project.to_string(), "project:1");
    assert_eq!(donation.to_string(), "donation:1");
    assert_eq!(expense.to_string(), "expense:1");
    assert_eq!(metric.to_string(), "metric:1");

    assert_eq!(platform.donate(donor, 20, None).to_string(), "donation:2");
    assert_eq!(platform.create_project("B", "b", 2).to_string(), "project:2");
}
