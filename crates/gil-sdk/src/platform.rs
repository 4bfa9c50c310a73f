use gil_ledger::{
    Donation, DonationLedger, Expense, ExpenseLedger, ImpactLedger, ImpactMetric, ImpactUpdate,
    Milestone, Project, ProjectLedger,
};
use gil_types::{
    AccountId, BlockHeight, DonationId, ExpenseId, MetricId, MilestoneId, ProjectId, UpdateId,
};

use crate::clock::{HostClock, SystemClock};
use crate::error::SdkResult;

/// The assembled bookkeeping core of a charitable-giving platform.
///
/// Owns one instance of each ledger plus the host clock, and forwards the
/// whole public surface. The owner identity given at construction
/// administers the verifier and reporter roles; everything else is
/// per-operation. One platform instance assumes at most one in-flight
/// mutation at a time, which `&mut self` enforces at compile time.
pub struct GivingPlatform<C = SystemClock> {
    donations: DonationLedger,
    expenses: ExpenseLedger,
    impact: ImpactLedger,
    projects: ProjectLedger,
    clock: C,
}

impl GivingPlatform<SystemClock> {
    /// Assemble a platform on the system clock.
    pub fn new(owner: AccountId) -> Self {
        Self::with_clock(owner, SystemClock)
    }
}

impl<C: HostClock> GivingPlatform<C> {
    /// Assemble a platform on an explicit host clock.
    pub fn with_clock(owner: AccountId, clock: C) -> Self {
        Self {
            donations: DonationLedger::new(),
            expenses: ExpenseLedger::new(owner.clone()),
            impact: ImpactLedger::new(owner),
            projects: ProjectLedger::new(),
            clock,
        }
    }

    pub fn owner(&self) -> &AccountId {
        self.expenses.owner()
    }

    // ---- Donations ----

    pub fn donate(
        &mut self,
        donor: AccountId,
        amount: u64,
        project: Option<ProjectId>,
    ) -> DonationId {
        let at = self.clock.timestamp();
        self.donations.donate(donor, amount, project, at)
    }

    pub fn total_donations(&self) -> u64 {
        self.donations.total_donations()
    }

    pub fn donor_contribution(&self, donor: &AccountId) -> u64 {
        self.donations.donor_contribution(donor)
    }

    pub fn donation(&self, id: DonationId) -> Option<&Donation> {
        self.donations.donation(id)
    }

    // ---- Expenses ----

    pub fn record_expense(
        &mut self,
        project: ProjectId,
        amount: u64,
        recipient: AccountId,
        description: impl Into<String>,
    ) -> ExpenseId {
        let at = self.clock.timestamp();
        self.expenses
            .record_expense(project, amount, recipient, description, at)
    }

    pub fn verify_expense(&mut self, sender: &AccountId, id: ExpenseId) -> SdkResult<()> {
        self.expenses.verify_expense(sender, id)?;
        Ok(())
    }

    pub fn add_verifier(&mut self, sender: &AccountId, account: AccountId) -> SdkResult<()> {
        self.expenses.add_verifier(sender, account)?;
        Ok(())
    }

    pub fn remove_verifier(&mut self, sender: &AccountId, account: &AccountId) -> SdkResult<()> {
        self.expenses.remove_verifier(sender, account)?;
        Ok(())
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.expense(id)
    }

    pub fn is_verified(&self, id: ExpenseId) -> bool {
        self.expenses.is_verified(id)
    }

    // ---- Impact metrics ----

    pub fn create_metric(
        &mut self,
        project: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        target_value: u64,
        unit: impl Into<String>,
    ) -> MetricId {
        self.impact
            .create_metric(project, name, description, target_value, unit)
    }

    pub fn update_metric_value(
        &mut self,
        sender: &AccountId,
        metric: MetricId,
        new_value: u64,
    ) -> SdkResult<UpdateId> {
        let at = self.clock.timestamp();
        let id = self.impact.update_metric_value(sender, metric, new_value, at)?;
        Ok(id)
    }

    pub fn add_reporter(&mut self, sender: &AccountId, account: AccountId) -> SdkResult<()> {
        self.impact.add_reporter(sender, account)?;
        Ok(())
    }

    pub fn remove_reporter(&mut self, sender: &AccountId, account: &AccountId) -> SdkResult<()> {
        self.impact.remove_reporter(sender, account)?;
        Ok(())
    }

    pub fn metric(&self, id: MetricId) -> Option<&ImpactMetric> {
        self.impact.metric(id)
    }

    pub fn metric_update(&self, id: UpdateId) -> Option<&ImpactUpdate> {
        self.impact.update(id)
    }

    pub fn metric_progress(&self, id: MetricId) -> u64 {
        self.impact.metric_progress(id)
    }

    // ---- Projects ----

    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        target_amount: u64,
    ) -> ProjectId {
        let at = self.clock.block_height();
        self.projects
            .create_project(name, description, target_amount, at)
    }

    pub fn add_milestone(
        &mut self,
        project: ProjectId,
        description: impl Into<String>,
        target_block: BlockHeight,
    ) -> SdkResult<MilestoneId> {
        let id = self.projects.add_milestone(project, description, target_block)?;
        Ok(id)
    }

    pub fn complete_milestone(&mut self, id: MilestoneId) -> SdkResult<()> {
        let at = self.clock.block_height();
        self.projects.complete_milestone(id, at)?;
        Ok(())
    }

    pub fn close_project(&mut self, id: ProjectId) -> SdkResult<()> {
        let at = self.clock.block_height();
        self.projects.close_project(id, at)?;
        Ok(())
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.project(id)
    }

    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.projects.milestone(id)
    }

    // ---- Subsystem access for richer queries ----

    pub fn donations(&self) -> &DonationLedger {
        &self.donations
    }

    pub fn expenses(&self) -> &ExpenseLedger {
        &self.expenses
    }

    pub fn impact(&self) -> &ImpactLedger {
        &self.impact
    }

    pub fn projects(&self) -> &ProjectLedger {
        &self.projects
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
