//! Load-balancing judge assigner.
//!
//! # Algorithm
//!
//! 1. Clamp the requested judges-per-submission target into [2, 3].
//! 2. Reset every submission's judges and every judge's counter.
//! 3. For each submission, in input order:
//!    a. Collect eligible judges, stably sorted by current counter
//!       (ties keep pool order).
//!    b. Assign them in that order until the target is reached.
//!    c. If nobody was assigned, fall back to the least-loaded judge in
//!       the whole pool regardless of tracks.
//!    d. Report the submission if it ends below 2 judges.
//!
//! # Complexity
//! O(s * j log j) where s=submissions, j=judges.
//!
//! Order matters throughout: the same inputs in a different order give a
//! different (but equally deterministic) assignment.

use tracing::{debug, info, warn};

use super::{AssignmentResult, JudgeLoad, UnderAssigned};
use crate::eligibility::eligible_judges;
use crate::models::{Judge, Submission};

/// Lowest judges-per-submission target, and the review-quality minimum.
pub const MIN_JUDGES_PER_SUBMISSION: usize = 2;

/// Highest judges-per-submission target.
pub const MAX_JUDGES_PER_SUBMISSION: usize = 3;

/// Clamps a requested judges-per-submission count into [2, 3].
pub fn clamp_judges_per_submission(requested: i64) -> usize {
    requested.clamp(
        MIN_JUDGES_PER_SUBMISSION as i64,
        MAX_JUDGES_PER_SUBMISSION as i64,
    ) as usize
}

/// Track-aware, load-balancing judge assigner.
///
/// # Example
///
/// ```
/// use u_judging::assignment::AutoAssigner;
/// use u_judging::models::{Judge, Submission};
///
/// let judges = vec![Judge::new("A"), Judge::new("B").with_tracks(["Uber"])];
/// let submissions = vec![
///     Submission::new("p1"),
///     Submission::new("p2").with_tracks(["Uber"]),
/// ];
///
/// let result = AutoAssigner::new().with_target(2).assign(&judges, &submissions);
/// assert_eq!(result.submissions[0].judge_count(), 2);
/// assert_eq!(result.under_assigned.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AutoAssigner {
    target: usize,
}

impl AutoAssigner {
    /// Creates an assigner with the minimum target (2).
    pub fn new() -> Self {
        Self {
            target: MIN_JUDGES_PER_SUBMISSION,
        }
    }

    /// Sets the judges-per-submission target (clamped into [2, 3]).
    pub fn with_target(mut self, requested: i64) -> Self {
        self.target = clamp_judges_per_submission(requested);
        self
    }

    /// The clamped target.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Assigns judges to submissions.
    ///
    /// Inputs are not modified; the returned submissions are fresh copies
    /// and the per-judge counters start at zero on every call.
    pub fn assign(&self, judges: &[Judge], submissions: &[Submission]) -> AssignmentResult {
        let mut counts = vec![0usize; judges.len()];
        let mut assigned = Vec::with_capacity(submissions.len());
        let mut under_assigned = Vec::new();

        for source in submissions {
            let mut submission = source.clone();
            submission.assigned_judges.clear();

            // Stable: equal counts keep pool order.
            let mut eligible = eligible_judges(judges, &submission.tracks);
            eligible.sort_by_key(|&idx| counts[idx]);

            for &idx in &eligible {
                if submission.judge_count() >= self.target {
                    break;
                }
                if submission.assign_judge(judges[idx].id.clone()) {
                    counts[idx] += 1;
                    debug!(
                        submission = %submission.id,
                        judge = %judges[idx].id,
                        load = counts[idx],
                        "assigned judge"
                    );
                }
            }

            if submission.judge_count() == 0 {
                // min_by_key keeps the first of equal minima.
                let fallback = counts
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, count)| *count)
                    .map(|(idx, _)| idx);
                if let Some(idx) = fallback {
                    submission.assign_judge(judges[idx].id.clone());
                    counts[idx] += 1;
                    warn!(
                        submission = %submission.id,
                        judge = %judges[idx].id,
                        "no eligible judge; assigned least-loaded judge outside track"
                    );
                }
            }

            if submission.judge_count() < MIN_JUDGES_PER_SUBMISSION {
                warn!(
                    submission = %submission.id,
                    assigned = submission.judge_count(),
                    eligible = eligible.len(),
                    "submission below minimum judge count"
                );
                under_assigned.push(UnderAssigned {
                    submission_id: submission.id.clone(),
                    submission_name: submission.name.clone(),
                    assigned_count: submission.judge_count(),
                    minimum_required: MIN_JUDGES_PER_SUBMISSION,
                    eligible_judge_count: eligible.len(),
                });
            }

            assigned.push(submission);
        }

        let judge_loads = judges
            .iter()
            .zip(&counts)
            .map(|(judge, &count)| JudgeLoad {
                judge_id: judge.id.clone(),
                judge_name: judge.name.clone(),
                count,
            })
            .collect();

        info!(
            submissions = assigned.len(),
            judges = judges.len(),
            target = self.target,
            under_assigned = under_assigned.len(),
            "judge assignment complete"
        );

        AssignmentResult {
            target: self.target,
            submissions: assigned,
            judge_loads,
            under_assigned,
        }
    }
}

impl Default for AutoAssigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Assigns judges with a requested target. See [`AutoAssigner::assign`].
pub fn auto_assign(
    judges: &[Judge],
    submissions: &[Submission],
    requested_target: i64,
) -> AssignmentResult {
    AutoAssigner::new()
        .with_target(requested_target)
        .assign(judges, submissions)
}
