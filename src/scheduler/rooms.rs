//! Greedy room/time packing with room-move minimization.
//!
//! # Algorithm
//!
//! 1. Step a cursor through the window one slot at a time.
//! 2. At each time, visit rooms in input order. For each room, pick the
//!    pending submission whose judges are all free at this time and which
//!    forces the fewest judges to change rooms (`move_cost`). Ties go to
//!    the submission keeping the most judges in this room (`stay_score`),
//!    then to input order.
//! 3. Record where each placed judge now sits and count every room change.
//! 4. Stop when everything is placed or the next slot would overrun the
//!    window; whatever is left is reported as unscheduled.
//!
//! # Complexity
//! O(t * r * s * k) where t=time slots, r=rooms, s=submissions,
//! k=judges per submission.
//!
//! This is a local, per-slot heuristic. It is not globally optimal and
//! its tie-break order is part of its contract.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use super::request::time_of_minute;
use super::ScheduleWindow;
use crate::models::{EntityId, Room, ScheduleResult, ScheduleSlot, Submission};

/// Greedy room scheduler over a fixed window.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use u_judging::models::{Room, Submission};
/// use u_judging::scheduler::{RoomScheduler, ScheduleWindow};
///
/// let window = ScheduleWindow::new(
///     NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
///     NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(13, 10, 0).unwrap(),
///     5,
/// );
/// let submissions = vec![
///     Submission::new("s1").with_judges(["j1"]),
///     Submission::new("s2").with_judges(["j2"]),
/// ];
/// let rooms = vec![Room::new(1), Room::new(2)];
///
/// let result = RoomScheduler::new(window).schedule(&submissions, &rooms);
/// assert_eq!(result.slot_count(), 2);
/// assert_eq!(result.room_move_count, 0);
/// ```
#[derive(Debug, Clone)]
pub struct RoomScheduler {
    window: ScheduleWindow,
}

impl RoomScheduler {
    /// Creates a scheduler for a window.
    pub fn new(window: ScheduleWindow) -> Self {
        Self { window }
    }

    /// The window being scheduled.
    pub fn window(&self) -> &ScheduleWindow {
        &self.window
    }

    /// Places submissions into rooms and time slots.
    ///
    /// Each submission is placed at most once with its full
    /// `assigned_judges` set. Submissions with no judges are placeable.
    /// A degenerate window or an empty room list yields no slots and
    /// every submission unscheduled.
    pub fn schedule(&self, submissions: &[Submission], rooms: &[Room]) -> ScheduleResult {
        let window = &self.window;
        if window.is_degenerate() || rooms.is_empty() {
            if !submissions.is_empty() {
                warn!(
                    submissions = submissions.len(),
                    rooms = rooms.len(),
                    slot_minutes = window.slot_duration_minutes,
                    "no usable slots; all submissions left unscheduled"
                );
            }
            return ScheduleResult::all_unscheduled(submissions.iter().map(|s| s.id.clone()));
        }

        let duration = window.slot_duration_minutes;
        let end = window.end_minute();
        let mut cursor = window.start_minute();

        let mut pending: Vec<&Submission> = submissions.iter().collect();
        let mut last_room: HashMap<&EntityId, &EntityId> = HashMap::new();
        let mut room_move_count = 0;
        let mut slots = Vec::new();

        while !pending.is_empty() && duration <= end - cursor {
            let (Some(start_time), Some(end_time)) =
                (time_of_minute(cursor), time_of_minute(cursor + duration))
            else {
                break;
            };

            let mut busy: HashSet<&EntityId> = HashSet::new();
            let mut picked = vec![false; pending.len()];

            for room in rooms {
                let mut best: Option<(usize, usize, usize)> = None;

                for (pos, submission) in pending.iter().enumerate() {
                    if picked[pos] || submission.assigned_judges.iter().any(|j| busy.contains(j)) {
                        continue;
                    }
                    let (move_cost, stay_score) =
                        room_affinity(&submission.assigned_judges, &room.id, &last_room);
                    let better = match best {
                        None => true,
                        Some((_, best_cost, best_stay)) => {
                            move_cost < best_cost
                                || (move_cost == best_cost && stay_score > best_stay)
                        }
                    };
                    if better {
                        best = Some((pos, move_cost, stay_score));
                    }
                }

                let Some((pos, move_cost, _)) = best else {
                    continue;
                };

                picked[pos] = true;
                let submission = pending[pos];
                for judge in &submission.assigned_judges {
                    busy.insert(judge);
                    last_room.insert(judge, &room.id);
                }
                room_move_count += move_cost;

                debug!(
                    submission = %submission.id,
                    room = %room.id,
                    start = %start_time,
                    moves = move_cost,
                    "placed submission"
                );

                slots.push(ScheduleSlot {
                    date: window.date,
                    start_time,
                    end_time,
                    submission_id: submission.id.clone(),
                    room_id: room.id.clone(),
                    judge_ids: submission.assigned_judges.clone(),
                });
            }

            pending = pending
                .into_iter()
                .zip(picked)
                .filter(|(_, was_picked)| !was_picked)
                .map(|(submission, _)| submission)
                .collect();
            cursor += duration;
        }

        let unscheduled_submission_ids: Vec<EntityId> =
            pending.iter().map(|s| s.id.clone()).collect();

        if !unscheduled_submission_ids.is_empty() {
            warn!(
                unscheduled = unscheduled_submission_ids.len(),
                "window too short to place every submission"
            );
        }
        info!(
            slots = slots.len(),
            rooms = rooms.len(),
            room_moves = room_move_count,
            "room schedule built"
        );

        ScheduleResult {
            slots,
            unscheduled_submission_ids,
            room_move_count,
        }
    }
}

/// Returns `(move_cost, stay_score)` for placing `judges` in `room`.
///
/// `move_cost` counts judges last seen in a different room; `stay_score`
/// counts judges last seen in this room. Judges never placed count
/// toward neither. A judge listed twice is counted once.
fn room_affinity(
    judges: &[EntityId],
    room: &EntityId,
    last_room: &HashMap<&EntityId, &EntityId>,
) -> (usize, usize) {
    let mut move_cost = 0;
    let mut stay_score = 0;
    let mut seen = HashSet::new();
    for judge in judges {
        if !seen.insert(judge) {
            continue;
        }
        match last_room.get(judge) {
            Some(&previous) if previous == room => stay_score += 1,
            Some(_) => move_cost += 1,
            None => {}
        }
    }
    (move_cost, stay_score)
}

/// Builds a schedule. See [`RoomScheduler::schedule`].
pub fn build_schedule(
    submissions: &[Submission],
    rooms: &[Room],
    window: &ScheduleWindow,
) -> ScheduleResult {
    RoomScheduler::new(*window).schedule(submissions, rooms)
}
