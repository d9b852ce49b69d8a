//! Schedule (solution) model.
//!
//! A schedule is a list of room/time slots, each hosting one submission
//! and the judges that evaluate it, plus the submissions that did not
//! fit into the window and the number of room moves judges had to make.
//!
//! # Persisted shape
//! `ScheduleSlot` serializes as
//! `{date, start_time, end_time, submission_id, room_id, judge_ids}`
//! with `date` as `YYYY-MM-DD` and times as `HH:MM`. Downstream views key
//! off these exact field names.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Wall-clock format used for slot start/end times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Date format used for slot dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One room/time unit hosting a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Event date.
    pub date: NaiveDate,
    /// Slot start (inclusive).
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Slot end (start + slot duration).
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Submission being judged.
    pub submission_id: EntityId,
    /// Room hosting the slot.
    pub room_id: EntityId,
    /// Judges servicing the slot.
    pub judge_ids: Vec<EntityId>,
}

/// Output of one schedule-builder run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Emitted slots, in time order (rooms in input order within a time).
    pub slots: Vec<ScheduleSlot>,
    /// Submissions that could not be placed, in input order.
    pub unscheduled_submission_ids: Vec<EntityId>,
    /// Number of times a judge was placed in a room other than its last one.
    pub room_move_count: usize,
}

/// A schedule invariant violation found by verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (room or judge).
    pub entity_id: EntityId,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two slots share a room and start time.
    RoomConflict,
    /// A judge appears in two slots with the same start time.
    JudgeConflict,
}

impl ScheduleSlot {
    /// Whether a judge services this slot.
    pub fn has_judge(&self, judge_id: &EntityId) -> bool {
        self.judge_ids.contains(judge_id)
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

impl ScheduleResult {
    /// A result with no slots and every given submission unscheduled.
    pub fn all_unscheduled(ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            slots: Vec::new(),
            unscheduled_submission_ids: ids.into_iter().collect(),
            room_move_count: 0,
        }
    }

    /// Number of emitted slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether every submission was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled_submission_ids.is_empty()
    }

    /// Slot hosting a given submission.
    pub fn slot_for_submission(&self, submission_id: &str) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.submission_id == submission_id)
    }

    /// All slots in a given room.
    pub fn slots_for_room(&self, room_id: &str) -> Vec<&ScheduleSlot> {
        self.slots.iter().filter(|s| s.room_id == room_id).collect()
    }

    /// All slots a given judge services, in time order.
    pub fn slots_for_judge(&self, judge_id: &str) -> Vec<&ScheduleSlot> {
        self.slots
            .iter()
            .filter(|s| s.judge_ids.iter().any(|j| j == judge_id))
            .collect()
    }

    /// Distinct start times, in order of first appearance.
    pub fn start_times(&self) -> Vec<NaiveTime> {
        let mut times: Vec<NaiveTime> = Vec::new();
        for slot in &self.slots {
            if !times.contains(&slot.start_time) {
                times.push(slot.start_time);
            }
        }
        times
    }
}

impl Violation {
    /// Creates a room conflict violation.
    pub fn room_conflict(room_id: impl Into<EntityId>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::RoomConflict,
            entity_id: room_id.into(),
            message: message.into(),
        }
    }

    /// Creates a judge conflict violation.
    pub fn judge_conflict(judge_id: impl Into<EntityId>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::JudgeConflict,
            entity_id: judge_id.into(),
            message: message.into(),
        }
    }
}

/// Serde adapter for `HH:MM` times.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(start: NaiveTime, room: &str, sub: &str, judges: &[&str]) -> ScheduleSlot {
        ScheduleSlot {
            date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            start_time: start,
            end_time: start + chrono::Duration::minutes(5),
            submission_id: sub.into(),
            room_id: room.into(),
            judge_ids: judges.iter().map(|j| EntityId::from(*j)).collect(),
        }
    }

    fn sample_result() -> ScheduleResult {
        ScheduleResult {
            slots: vec![
                slot(t(13, 0), "R1", "s1", &["j1"]),
                slot(t(13, 0), "R2", "s2", &["j2"]),
                slot(t(13, 5), "R1", "s3", &["j1", "j2"]),
            ],
            unscheduled_submission_ids: vec!["s4".into()],
            room_move_count: 1,
        }
    }

    #[test]
    fn test_slot_persisted_shape() {
        let s = slot(t(13, 0), "1", "p1", &["a", "b"]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2025-03-08",
                "start_time": "13:00",
                "end_time": "13:05",
                "submission_id": "p1",
                "room_id": "1",
                "judge_ids": ["a", "b"],
            })
        );

        let back: ScheduleSlot = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_result_queries() {
        let r = sample_result();
        assert_eq!(r.slot_count(), 3);
        assert!(!r.is_complete());
        assert_eq!(r.slot_for_submission("s3").unwrap().room_id, "R1");
        assert!(r.slot_for_submission("s4").is_none());
        assert_eq!(r.slots_for_room("R1").len(), 2);
        assert_eq!(r.slots_for_judge("j2").len(), 2);
        assert_eq!(r.start_times(), vec![t(13, 0), t(13, 5)]);
    }

    #[test]
    fn test_slot_duration() {
        let s = slot(t(9, 55), "R1", "s1", &[]);
        assert_eq!(s.duration_minutes(), 5);
        assert!(!s.has_judge(&"j1".into()));
    }

    #[test]
    fn test_all_unscheduled() {
        let r = ScheduleResult::all_unscheduled(vec!["a".into(), "b".into()]);
        assert_eq!(r.slot_count(), 0);
        assert_eq!(r.room_move_count, 0);
        assert_eq!(r.unscheduled_submission_ids.len(), 2);
    }

    #[test]
    fn test_violation_factories() {
        let v1 = Violation::room_conflict("R1", "double booked");
        assert_eq!(v1.violation_type, ViolationType::RoomConflict);
        assert_eq!(v1.entity_id, "R1");

        let v2 = Violation::judge_conflict("j1", "in two rooms");
        assert_eq!(v2.violation_type, ViolationType::JudgeConflict);
    }
}
