use serde::{Deserialize, Serialize};
use tracing::debug;

use gil_roles::{Role, RoleRegistry};
use gil_types::{AccountId, Arena, MetricId, ProjectId, Timestamp, UpdateId};

use crate::error::LedgerError;

/// A named, targeted quantity tracked for a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub project: ProjectId,
    pub name: String,
    pub description: String,
    pub target_value: u64,
    /// Always equals the `new_value` of the most recent update, 0 if none.
    pub current_value: u64,
    pub unit: String,
}

/// Immutable audit record of one metric value change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactUpdate {
    pub metric: MetricId,
    pub old_value: u64,
    pub new_value: u64,
    pub timestamp: Timestamp,
    pub reporter: AccountId,
}

/// Impact metric book with reporter-gated updates.
///
/// Metric creation is permissionless. Value changes are gated through a
/// reporter [`RoleRegistry`] and never overwrite history: each change
/// appends an [`ImpactUpdate`] carrying the old and new values, then moves
/// the metric's `current_value`. Decreasing values are allowed; only the
/// history itself is monotonic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactLedger {
    metrics: Arena<MetricId, ImpactMetric>,
    updates: Arena<UpdateId, ImpactUpdate>,
    reporters: RoleRegistry,
}

impl ImpactLedger {
    pub fn new(owner: AccountId) -> Self {
        Self {
            metrics: Arena::new(),
            updates: Arena::new(),
            reporters: RoleRegistry::new(Role::Reporter, owner),
        }
    }

    /// Create a metric with `current_value = 0`.
    pub fn create_metric(
        &mut self,
        project: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        target_value: u64,
        unit: impl Into<String>,
    ) -> MetricId {
        let name = name.into();
        let id = self.metrics.insert(ImpactMetric {
            project,
            name: name.clone(),
            description: description.into(),
            target_value,
            current_value: 0,
            unit: unit.into(),
        });
        debug!(id = %id, project = %project, name, target_value, "metric created");
        id
    }

    /// Move a metric's value, appending one audit record.
    ///
    /// Checks existence before authorization, mirroring expense
    /// verification. On success the update record and the new
    /// `current_value` land together; on failure neither exists.
    pub fn update_metric_value(
        &mut self,
        sender: &AccountId,
        metric: MetricId,
        new_value: u64,
        at: Timestamp,
    ) -> Result<UpdateId, LedgerError> {
        let Some(record) = self.metrics.get_mut(metric) else {
            return Err(LedgerError::MetricNotFound(metric));
        };
        if !self.reporters.is_authorized(sender) {
            return Err(LedgerError::NotAuthorized {
                role: Role::Reporter,
                sender: sender.clone(),
            });
        }

        let old_value = record.current_value;
        record.current_value = new_value;
        let update_id = self.updates.insert(ImpactUpdate {
            metric,
            old_value,
            new_value,
            timestamp: at,
            reporter: sender.clone(),
        });
        debug!(
            id = %update_id, metric = %metric, old_value, new_value,
            reporter = %sender, "metric value updated"
        );
        Ok(update_id)
    }

    /// Owner-gated; idempotent on re-grant.
    pub fn add_reporter(
        &mut self,
        sender: &AccountId,
        account: AccountId,
    ) -> Result<(), LedgerError> {
        self.reporters.grant(sender, account)?;
        Ok(())
    }

    /// Owner-gated; idempotent on unknown accounts.
    pub fn remove_reporter(
        &mut self,
        sender: &AccountId,
        account: &AccountId,
    ) -> Result<(), LedgerError> {
        self.reporters.revoke(sender, account)?;
        Ok(())
    }

    pub fn metric(&self, id: MetricId) -> Option<&ImpactMetric> {
        self.metrics.get(id)
    }

    pub fn update(&self, id: UpdateId) -> Option<&ImpactUpdate> {
        self.updates.get(id)
    }

    /// Percentage of target reached, in truncating integer division.
    ///
    /// Unknown metrics and zero targets report 0 rather than failing; the
    /// u128 intermediate keeps `current * 100` from overflowing.
    pub fn metric_progress(&self, id: MetricId) -> u64 {
        let Some(metric) = self.metrics.get(id) else {
            return 0;
        };
        if metric.target_value == 0 {
            return 0;
        }
        ((metric.current_value as u128 * 100) / metric.target_value as u128) as u64
    }

    pub fn is_reporter(&self, account: &AccountId) -> bool {
        self.reporters.is_authorized(account)
    }

    pub fn owner(&self) -> &AccountId {
        self.reporters.owner()
    }

    pub fn metric_count(&self) -> u64 {
        self.metrics.len()
    }

    /// Audit history of one metric, in update order.
    pub fn updates_for(
        &self,
        metric: MetricId,
    ) -> impl Iterator<Item = (UpdateId, &ImpactUpdate)> {
        self.updates.iter().filter(move |(_, u)| u.metric == metric)
    }
}
