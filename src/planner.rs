//! End-to-end judging plan.
//!
//! Runs the balancer and feeds its annotated submissions straight into
//! the room scheduler. Both stages stay independently callable; this is
//! only the common composition.

use serde::Serialize;

use crate::assignment::{AssignmentResult, AutoAssigner};
use crate::models::{Judge, Room, ScheduleResult, Submission};
use crate::scheduler::{RoomScheduler, ScheduleWindow};

/// Assignment and schedule produced together.
#[derive(Debug, Clone, Serialize)]
pub struct JudgingPlan {
    /// Balancer output.
    pub assignment: AssignmentResult,
    /// Scheduler output for `assignment.submissions`.
    pub schedule: ScheduleResult,
}

impl JudgingPlan {
    /// Whether every submission met the judge minimum and got a slot.
    pub fn is_complete(&self) -> bool {
        self.assignment.is_fully_staffed() && self.schedule.is_complete()
    }
}

/// Assigns judges, then schedules the assigned submissions into rooms.
///
/// # Example
///
/// ```
/// use u_judging::models::{Judge, Room, Submission};
/// use u_judging::planner::plan_judging;
/// use u_judging::scheduler::ScheduleRequest;
///
/// let judges = vec![Judge::new("a"), Judge::new("b"), Judge::new("c"), Judge::new("d")];
/// let submissions = vec![Submission::new("p1"), Submission::new("p2")];
/// let rooms = vec![Room::new(1), Room::new(2)];
/// let window = ScheduleRequest::new("2025-03-08", "13:00", "13:30", 10)
///     .to_window()
///     .unwrap();
///
/// let plan = plan_judging(&judges, &submissions, &rooms, 2, &window);
/// assert!(plan.is_complete());
/// assert_eq!(plan.schedule.slot_count(), 2);
/// ```
pub fn plan_judging(
    judges: &[Judge],
    submissions: &[Submission],
    rooms: &[Room],
    requested_target: i64,
    window: &ScheduleWindow,
) -> JudgingPlan {
    let assignment = AutoAssigner::new()
        .with_target(requested_target)
        .assign(judges, submissions);
    let schedule = RoomScheduler::new(*window).schedule(&assignment.submissions, rooms);
    JudgingPlan {
        assignment,
        schedule,
    }
}
