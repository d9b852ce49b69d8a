//! Input validation and schedule verification.
//!
//! `validate_input` checks the structural integrity of judges,
//! submissions, and rooms before a run. Detects:
//! - Duplicate IDs
//! - Assigned judges missing from the judge pool
//! - A judge assigned twice to the same submission
//!
//! The balancer and scheduler do not require validation; they tolerate
//! all of the above. Validation lets callers surface data problems.
//!
//! `verify_schedule` checks a finished schedule against its two
//! exclusion invariants: one submission per room per start time, and one
//! room per judge per start time.

use crate::models::{EntityId, Judge, Room, ScheduleResult, Submission, Violation, TIME_FORMAT};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A submission lists a judge that is not in the pool.
    UnknownJudge,
    /// A submission lists the same judge twice.
    DuplicateAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates judges, submissions, and rooms.
///
/// Checks:
/// 1. No duplicate judge IDs
/// 2. No duplicate submission IDs
/// 3. No duplicate room IDs
/// 4. Every assigned judge exists in the pool
/// 5. No judge appears twice on one submission
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    judges: &[Judge],
    submissions: &[Submission],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut judge_ids = HashSet::new();
    for j in judges {
        if !judge_ids.insert(&j.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate judge ID: {}", j.id),
            ));
        }
    }

    let mut submission_ids = HashSet::new();
    for s in submissions {
        if !submission_ids.insert(&s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate submission ID: {}", s.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(&r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    for s in submissions {
        let mut seen = HashSet::new();
        for judge in &s.assigned_judges {
            if !seen.insert(judge) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAssignment,
                    format!("Submission '{}' lists judge '{}' twice", s.id, judge),
                ));
            }
            if !judge_ids.contains(judge) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownJudge,
                    format!("Submission '{}' references unknown judge '{}'", s.id, judge),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks room and judge exclusion at every start time.
///
/// Returns one violation per offending slot, in slot order. An empty
/// list means the schedule is consistent.
pub fn verify_schedule(result: &ScheduleResult) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut rooms_taken: HashSet<(NaiveDate, NaiveTime, &EntityId)> = HashSet::new();
    let mut judges_taken: HashSet<(NaiveDate, NaiveTime, &EntityId)> = HashSet::new();

    for slot in &result.slots {
        if !rooms_taken.insert((slot.date, slot.start_time, &slot.room_id)) {
            violations.push(Violation::room_conflict(
                slot.room_id.clone(),
                format!(
                    "Room '{}' hosts more than one submission at {} {}",
                    slot.room_id,
                    slot.date,
                    slot.start_time.format(TIME_FORMAT)
                ),
            ));
        }
        let mut listed = HashSet::new();
        for judge in &slot.judge_ids {
            if !listed.insert(judge) {
                continue;
            }
            if !judges_taken.insert((slot.date, slot.start_time, judge)) {
                violations.push(Violation::judge_conflict(
                    judge.clone(),
                    format!(
                        "Judge '{}' is in two rooms at {} {} (submission '{}')",
                        judge,
                        slot.date,
                        slot.start_time.format(TIME_FORMAT),
                        slot.submission_id
                    ),
                ));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleSlot, ViolationType};

    fn sample_judges() -> Vec<Judge> {
        vec![
            Judge::new("j1").with_name("Ada"),
            Judge::new("j2").with_name("Grace").with_tracks(["AI"]),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new(1).with_name("Hall A"), Room::new(2).with_name("Hall B")]
    }

    fn slot(start: u32, room: &str, sub: &str, judges: &[&str]) -> ScheduleSlot {
        ScheduleSlot {
            date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            start_time: NaiveTime::from_hms_opt(13, start, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(13, start + 5, 0).unwrap(),
            submission_id: sub.into(),
            room_id: room.into(),
            judge_ids: judges.iter().map(|j| EntityId::from(*j)).collect(),
        }
    }

    #[test]
    fn test_valid_input() {
        let submissions = vec![
            Submission::new("p1").with_judges(["j1", "j2"]),
            Submission::new("p2"),
        ];
        assert!(validate_input(&sample_judges(), &submissions, &sample_rooms()).is_ok());
    }

    #[test]
    fn test_duplicate_judge_id() {
        let judges = vec![Judge::new("j1"), Judge::new("j1")];
        let errors = validate_input(&judges, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("judge")));
    }

    #[test]
    fn test_duplicate_room_id_across_representations() {
        // Integer 1 and string "1" normalize to the same id.
        let rooms: Vec<Room> =
            serde_json::from_str(r#"[{"id":1,"name":"A"},{"id":"1","name":"B"}]"#).unwrap();
        let errors = validate_input(&[], &[], &rooms).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_duplicate_submission_id() {
        let submissions = vec![Submission::new("p1"), Submission::new("p1")];
        let errors = validate_input(&sample_judges(), &submissions, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("submission"));
    }

    #[test]
    fn test_unknown_judge() {
        let submissions = vec![Submission::new("p1").with_judges(["ghost"])];
        let errors = validate_input(&sample_judges(), &submissions, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownJudge && e.message.contains("ghost")));
    }

    #[test]
    fn test_duplicate_assignment() {
        // Built directly: the builder methods refuse duplicates.
        let mut submission = Submission::new("p1");
        submission.assigned_judges = vec!["j1".into(), "j1".into()];
        let errors = validate_input(&sample_judges(), &[submission], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateAssignment));
    }

    #[test]
    fn test_multiple_errors() {
        let judges = vec![Judge::new("j1"), Judge::new("j1")];
        let submissions = vec![Submission::new("p1").with_judges(["nobody"])];
        let errors = validate_input(&judges, &submissions, &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_verify_consistent_schedule() {
        let result = ScheduleResult {
            slots: vec![
                slot(0, "R1", "s1", &["j1"]),
                slot(0, "R2", "s2", &["j2"]),
                slot(5, "R1", "s3", &["j1", "j2"]),
            ],
            ..Default::default()
        };
        assert!(verify_schedule(&result).is_empty());
    }

    #[test]
    fn test_verify_room_conflict() {
        let result = ScheduleResult {
            slots: vec![slot(0, "R1", "s1", &["j1"]), slot(0, "R1", "s2", &["j2"])],
            ..Default::default()
        };
        let violations = verify_schedule(&result);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::RoomConflict);
        assert_eq!(violations[0].entity_id, "R1");
    }

    #[test]
    fn test_verify_ignores_judge_repeated_within_slot() {
        let result = ScheduleResult {
            slots: vec![slot(0, "R1", "s1", &["j1", "j1"]), slot(0, "R2", "s2", &["j1"])],
            ..Default::default()
        };
        let violations = verify_schedule(&result);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::JudgeConflict);
    }

    #[test]
    fn test_verify_judge_conflict() {
        let result = ScheduleResult {
            slots: vec![slot(0, "R1", "s1", &["j1"]), slot(0, "R2", "s2", &["j2", "j1"])],
            ..Default::default()
        };
        let violations = verify_schedule(&result);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::JudgeConflict);
        assert_eq!(violations[0].entity_id, "j1");
        assert!(violations[0].message.contains("s2"));
    }
}
