//! Assignment results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{EntityId, Submission};

/// Final assignment count for one judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeLoad {
    /// Judge identifier.
    pub judge_id: EntityId,
    /// Judge display name.
    pub judge_name: String,
    /// Number of submissions assigned to this judge.
    pub count: usize,
}

/// A submission that ended balancing below the review minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderAssigned {
    /// Submission identifier.
    pub submission_id: EntityId,
    /// Submission display name.
    pub submission_name: String,
    /// Judges actually assigned.
    pub assigned_count: usize,
    /// Minimum judges required for a sound review.
    pub minimum_required: usize,
    /// Judges in the pool eligible for the submission's tracks.
    pub eligible_judge_count: usize,
}

/// Output of one balancer run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    /// Clamped judges-per-submission target that was used.
    pub target: usize,
    /// Copies of the input submissions with `assigned_judges` filled in.
    pub submissions: Vec<Submission>,
    /// Per-judge counts, in judge pool order.
    pub judge_loads: Vec<JudgeLoad>,
    /// Submissions below the minimum, in submission order.
    #[serde(rename = "underAssignedProjects")]
    pub under_assigned: Vec<UnderAssigned>,
}

impl AssignmentResult {
    /// Judge name → assignment count.
    ///
    /// Judges sharing a display name have their counts summed.
    pub fn counts_by_name(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for load in &self.judge_loads {
            *counts.entry(load.judge_name.clone()).or_insert(0) += load.count;
        }
        counts
    }

    /// Assignment count for a judge id (`None` if not in the pool).
    pub fn load_for(&self, judge_id: &str) -> Option<usize> {
        self.judge_loads
            .iter()
            .find(|l| l.judge_id == judge_id)
            .map(|l| l.count)
    }

    /// Result submission by id.
    pub fn submission(&self, submission_id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == submission_id)
    }

    /// Total (submission, judge) edges.
    pub fn edge_count(&self) -> usize {
        self.submissions.iter().map(Submission::judge_count).sum()
    }

    /// Sum of per-judge counts. Always equals `edge_count`.
    pub fn total_load(&self) -> usize {
        self.judge_loads.iter().map(|l| l.count).sum()
    }

    /// Whether every submission reached the minimum.
    pub fn is_fully_staffed(&self) -> bool {
        self.under_assigned.is_empty()
    }
}
