//! Schedule quality metrics (KPIs).
//!
//! Computes the indicators a dashboard shows next to a room schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slots used | Number of emitted slots |
//! | Slot capacity | Whole slots in the window × rooms |
//! | Utilization | Slots used / slot capacity |
//! | Room moves | Judge placements in a room other than the judge's last one |
//! | Unscheduled | Submissions left out of the window |

use std::collections::HashMap;

use super::ScheduleWindow;
use crate::models::{EntityId, Room, ScheduleResult};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of emitted slots.
    pub slots_used: usize,
    /// Total room/time slots the window offers.
    pub slot_capacity: usize,
    /// Fraction of capacity used (0.0..1.0).
    pub utilization: f64,
    /// Per-room fraction of the window's time slots used.
    pub utilization_by_room: HashMap<EntityId, f64>,
    /// Submissions left unscheduled.
    pub unscheduled_count: usize,
    /// Total room moves, as reported by the builder.
    pub room_move_count: usize,
    /// Room moves per judge, replayed from slot order.
    pub room_moves_by_judge: HashMap<EntityId, usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the rooms and window it was built for.
    pub fn calculate(result: &ScheduleResult, rooms: &[Room], window: &ScheduleWindow) -> Self {
        let per_room = window.slot_count();
        let slot_capacity = per_room * rooms.len();
        let slots_used = result.slot_count();

        let utilization = if slot_capacity == 0 {
            0.0
        } else {
            slots_used as f64 / slot_capacity as f64
        };

        let mut utilization_by_room = HashMap::new();
        for room in rooms {
            let used = result.slots.iter().filter(|s| s.room_id == room.id).count();
            let value = if per_room == 0 {
                0.0
            } else {
                used as f64 / per_room as f64
            };
            utilization_by_room.insert(room.id.clone(), value);
        }

        Self {
            slots_used,
            slot_capacity,
            utilization,
            utilization_by_room,
            unscheduled_count: result.unscheduled_submission_ids.len(),
            room_move_count: result.room_move_count,
            room_moves_by_judge: replay_room_moves(result),
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_room_moves: usize, min_utilization: f64) -> bool {
        self.room_move_count <= max_room_moves && self.utilization >= min_utilization
    }

    /// Judge with the most room moves (ties: smallest id).
    pub fn busiest_walker(&self) -> Option<(&EntityId, usize)> {
        self.room_moves_by_judge
            .iter()
            .filter(|(_, moves)| **moves > 0)
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(id, &moves)| (id, moves))
    }
}

/// Walks slots in emission order and counts, per judge, each placement in
/// a room other than the one the judge last occupied.
fn replay_room_moves(result: &ScheduleResult) -> HashMap<EntityId, usize> {
    let mut last_room: HashMap<&EntityId, &EntityId> = HashMap::new();
    let mut moves: HashMap<EntityId, usize> = HashMap::new();

    for slot in &result.slots {
        for judge in &slot.judge_ids {
            let entry = moves.entry(judge.clone()).or_insert(0);
            if let Some(&previous) = last_room.get(judge) {
                if previous != &slot.room_id {
                    *entry += 1;
                }
            }
            last_room.insert(judge, &slot.room_id);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;
    use crate::scheduler::build_schedule;
    use chrono::{NaiveDate, NaiveTime};

    fn window(minutes: i64) -> ScheduleWindow {
        ScheduleWindow::new(
            NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 10, 0).unwrap(),
            minutes,
        )
    }

    fn rooms() -> Vec<Room> {
        vec![Room::new("R1"), Room::new("R2")]
    }

    #[test]
    fn test_kpi_with_room_move() {
        let submissions = vec![
            Submission::new("s1").with_judges(["j1", "j2"]),
            Submission::new("s2").with_judges(["j2"]),
            Submission::new("s3").with_judges(["j1"]),
        ];
        let w = window(5);
        let result = build_schedule(&submissions, &rooms(), &w);
        let kpi = ScheduleKpi::calculate(&result, &rooms(), &w);

        assert_eq!(kpi.slots_used, 3);
        assert_eq!(kpi.slot_capacity, 4);
        assert!((kpi.utilization - 0.75).abs() < 1e-10);
        assert!((kpi.utilization_by_room[&EntityId::from("R1")] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_room[&EntityId::from("R2")] - 0.5).abs() < 1e-10);
        assert_eq!(kpi.room_move_count, 1);
        assert_eq!(kpi.room_moves_by_judge[&EntityId::from("j1")], 1);
        assert_eq!(kpi.room_moves_by_judge[&EntityId::from("j2")], 0);
        assert_eq!(kpi.busiest_walker(), Some((&EntityId::from("j1"), 1)));
        assert_eq!(kpi.unscheduled_count, 0);
    }

    #[test]
    fn test_replayed_moves_match_builder() {
        let submissions: Vec<Submission> = (0..8)
            .map(|i| {
                Submission::new(format!("s{i}"))
                    .with_judges([format!("j{}", i % 3), format!("j{}", (i + 1) % 4)])
            })
            .collect();
        let w = ScheduleWindow::new(
            NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            15,
        );
        let room_list = vec![Room::new(1), Room::new(2), Room::new(3)];
        let result = build_schedule(&submissions, &room_list, &w);
        let kpi = ScheduleKpi::calculate(&result, &room_list, &w);

        let replayed: usize = kpi.room_moves_by_judge.values().sum();
        assert_eq!(replayed, result.room_move_count);
    }

    #[test]
    fn test_kpi_degenerate_window() {
        let w = window(0);
        let result = ScheduleResult::all_unscheduled(vec!["s1".into()]);
        let kpi = ScheduleKpi::calculate(&result, &rooms(), &w);
        assert_eq!(kpi.slot_capacity, 0);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
        assert_eq!(kpi.unscheduled_count, 1);
        assert!(kpi.busiest_walker().is_none());
    }

    #[test]
    fn test_meets_thresholds() {
        let submissions = vec![
            Submission::new("s1").with_judges(["j1", "j2"]),
            Submission::new("s2").with_judges(["j2"]),
            Submission::new("s3").with_judges(["j1"]),
        ];
        let w = window(5);
        let result = build_schedule(&submissions, &rooms(), &w);
        let kpi = ScheduleKpi::calculate(&result, &rooms(), &w);

        assert!(kpi.meets_thresholds(1, 0.75));
        assert!(!kpi.meets_thresholds(0, 0.0));
        assert!(!kpi.meets_thresholds(5, 0.9));
    }
}
