use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gil_types::{Arena, BlockHeight, MilestoneId, ProjectId};

use crate::error::LedgerError;

/// Lifecycle state of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Closed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A funded project with a target amount and a block-bounded lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub target_amount: u64,
    pub start_block: BlockHeight,
    /// Set once when the project closes.
    pub end_block: Option<BlockHeight>,
    pub status: ProjectStatus,
}

/// A sub-goal of a project with a one-time completion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub project: ProjectId,
    pub description: String,
    pub target_block: BlockHeight,
    /// Transitions false→true exactly once, never back.
    pub completed: bool,
    pub completion_block: Option<BlockHeight>,
}

/// Project and milestone book.
///
/// Creation is permissionless and milestone completion is ungated: any
/// sender may complete any milestone. Completion is still one-time; a
/// second attempt fails and changes nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLedger {
    projects: Arena<ProjectId, Project>,
    milestones: Arena<MilestoneId, Milestone>,
}

impl ProjectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a project as active with no end block.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        target_amount: u64,
        at: BlockHeight,
    ) -> ProjectId {
        let name = name.into();
        let id = self.projects.insert(Project {
            name: name.clone(),
            description: description.into(),
            target_amount,
            start_block: at,
            end_block: None,
            status: ProjectStatus::Active,
        });
        debug!(id = %id, name, target_amount, "project created");
        id
    }

    /// Attach a milestone to an existing project.
    ///
    /// Fails with `ProjectNotFound` for unknown projects, in which case the
    /// milestone id space is untouched.
    pub fn add_milestone(
        &mut self,
        project: ProjectId,
        description: impl Into<String>,
        target_block: BlockHeight,
    ) -> Result<MilestoneId, LedgerError> {
        if !self.projects.contains(project) {
            return Err(LedgerError::ProjectNotFound(project));
        }
        let id = self.milestones.insert(Milestone {
            project,
            description: description.into(),
            target_block,
            completed: false,
            completion_block: None,
        });
        debug!(id = %id, project = %project, "milestone added");
        Ok(id)
    }

    /// Mark a milestone completed exactly once, stamping the completion
    /// block. Carries no role gate.
    pub fn complete_milestone(
        &mut self,
        id: MilestoneId,
        at: BlockHeight,
    ) -> Result<(), LedgerError> {
        let Some(milestone) = self.milestones.get_mut(id) else {
            return Err(LedgerError::MilestoneNotFound(id));
        };
        if milestone.completed {
            return Err(LedgerError::AlreadyCompleted(id));
        }

        milestone.completed = true;
        milestone.completion_block = Some(at);
        debug!(id = %id, block = %at, "milestone completed");
        Ok(())
    }

    /// Close a project exactly once, stamping the end block.
    pub fn close_project(&mut self, id: ProjectId, at: BlockHeight) -> Result<(), LedgerError> {
        let Some(project) = self.projects.get_mut(id) else {
            return Err(LedgerError::ProjectNotFound(id));
        };
        if project.status == ProjectStatus::Closed {
            return Err(LedgerError::AlreadyClosed(id));
        }

        project.status = ProjectStatus::Closed;
        project.end_block = Some(at);
        debug!(id = %id, block = %at, "project closed");
        Ok(())
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.get(id)
    }

    pub fn project_count(&self) -> u64 {
        self.projects.len()
    }

    pub fn milestone_count(&self) -> u64 {
        self.milestones.len()
    }

    /// Milestones of one project, in creation order.
    pub fn milestones_for(
        &self,
        project: ProjectId,
    ) -> impl Iterator<Item = (MilestoneId, &Milestone)> {
        self.milestones
            .iter()
            .filter(move |(_, m)| m.project == project)
    }
}
